mod args;
mod generator;
mod stream;

use std::{
    fs::File,
    io::{self, BufWriter, Write},
};

use args::CliArgs;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use stream::write_log_lines;

fn main() -> io::Result<()> {
    let args = CliArgs::parse();
    let mut rng = match args.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_os_rng(),
    };

    let mut out: Box<dyn Write> = match args.output() {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    write_log_lines(&mut rng, *args.lines(), &mut out)?;

    if let Some(path) = args.output() {
        eprintln!("Wrote {} log lines to {}", args.lines(), path.display());
    }
    Ok(())
}
