use std::io::{self, Write};

use rand::Rng;

use crate::generator::generate_combined_log;

pub fn write_log_lines<R, W>(rng: &mut R, count: usize, out: &mut W) -> io::Result<()>
where
    R: Rng + ?Sized,
    W: Write + ?Sized,
{
    for _ in 0..count {
        writeln!(out, "{}", generate_combined_log(rng))?;
    }
    out.flush()
}
