// src/app.rs
use std::io::{BufRead, Write};

use log::info;
use prime_range_domain::{PrimeRange, PrimeStatistics};
use prime_range_shared_kernel::ErrorContext;

use crate::config::Config;
use crate::error::Result;
use crate::input::{TokenReader, acquire_range};
use crate::presentation;

/// Outcome of one interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub range: PrimeRange,
    pub stats: PrimeStatistics,
}

/// Reads a range from `input`, computes its statistics and writes the
/// prompts and the report to `out`.
///
/// # Errors
///
/// Fails when `input` ends before a valid range was entered or when writing
/// to `out` fails.
pub fn run<R, W>(config: &Config, input: R, out: &mut W) -> Result<Session>
where
    R: BufRead,
    W: Write,
{
    let mut tokens = TokenReader::new(input);
    let range = acquire_range(&mut tokens, out, config.prompts)?;

    let stats = range.statistics();
    info!("{} primes in {range}", stats.count);

    presentation::print_results(out, &range, &stats, config.format)
        .with_context(|| format!("writing results for {range}"))?;

    Ok(Session { range, stats })
}
