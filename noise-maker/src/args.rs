use std::path::PathBuf;

use clap::Parser;
use derive_getters::Getters;

#[derive(Parser, Debug, Getters)]
#[command(name = "noise-maker")]
#[command(about = "Generate fake combined-format access logs for testing", long_about = None)]
pub struct CliArgs {
    #[arg(long, default_value_t = 1000)]
    lines: usize,

    /// Write to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Seed for reproducible field choices
    #[arg(long)]
    seed: Option<u64>,
}
