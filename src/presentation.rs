// src/presentation.rs
use std::io::Write;

use prime_range_domain::{PrimeRange, PrimeStatistics};
use prime_range_shared_kernel::{PresentationResult, PrimeCount};
use serde::Serialize;

use crate::config::OutputFormat;

/// Serialized shape of the `json` and `jsonl` formats.
#[derive(Debug, Serialize)]
struct Report<'a> {
    start: i32,
    end: i32,
    last_three: &'a [i32],
    count: PrimeCount,
}

impl<'a> Report<'a> {
    fn new(range: &PrimeRange, stats: &'a PrimeStatistics) -> Self {
        Self {
            start: range.start(),
            end: range.end(),
            last_three: &stats.last_three,
            count: stats.count,
        }
    }
}

pub fn print_results<W: Write>(
    out: &mut W,
    range: &PrimeRange,
    stats: &PrimeStatistics,
    format: OutputFormat,
) -> PresentationResult<()> {
    match format {
        OutputFormat::Text => print_text(out, range, stats)?,
        OutputFormat::Json => print_json(out, range, stats)?,
        OutputFormat::Jsonl => print_jsonl(out, range, stats)?,
    }
    out.flush()?;
    Ok(())
}

fn print_text<W: Write>(out: &mut W, range: &PrimeRange, stats: &PrimeStatistics) -> PresentationResult<()> {
    if stats.is_empty() {
        writeln!(out, "No prime numbers found in the range {range}")?;
    } else {
        writeln!(
            out,
            "The last prime numbers in the range {range} are: {}",
            join_primes(&stats.last_three)
        )?;
    }
    writeln!(out, "The number of prime numbers in this range is: {}", stats.count)?;
    Ok(())
}

fn print_json<W: Write>(out: &mut W, range: &PrimeRange, stats: &PrimeStatistics) -> PresentationResult<()> {
    serde_json::to_writer_pretty(&mut *out, &Report::new(range, stats))?;
    writeln!(out)?;
    Ok(())
}

fn print_jsonl<W: Write>(out: &mut W, range: &PrimeRange, stats: &PrimeStatistics) -> PresentationResult<()> {
    serde_json::to_writer(&mut *out, &Report::new(range, stats))?;
    writeln!(out)?;
    Ok(())
}

fn join_primes(primes: &[i32]) -> String {
    primes.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}
