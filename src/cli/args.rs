// src/cli/args.rs
use clap::Parser;
use log::LevelFilter;

use super::value_enum::CliOutputFormat;

/// Top-level CLI arguments parsed via clap.
///
/// Every flag is optional: without arguments the tool prompts for the range
/// and prints the plain-text summary.
#[derive(Parser, Debug)]
#[command(
    name = "prime_range",
    version = crate::VERSION,
    about = "Counts the primes in a range and shows the last three of them"
)]
pub struct Args {
    /// Result format
    #[arg(long, value_enum, default_value = "text", help_heading = "Output")]
    pub format: CliOutputFormat,

    /// Do not print the interactive prompts (errors and results are still printed)
    #[arg(long, short, help_heading = "Output")]
    pub quiet: bool,

    /// Set log filter value [ off, error, warn, info, debug, trace ]; `RUST_LOG` takes precedence
    #[arg(long, default_value_t = LevelFilter::Warn, help_heading = "Diagnostics")]
    pub log_level: LevelFilter,
}
