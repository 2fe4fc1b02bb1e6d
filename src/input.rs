// src/input.rs
//! Interactive acquisition of a validated range.
//!
//! Each attempt asks for the start and then the end of the range. A token that
//! is not an integer drops the rest of its line and starts over; a pair that
//! is out of order or negative is reported and asked for again. The loop only
//! returns on a valid range or when the input stream ends.

mod tokens;

pub use tokens::{DISCARD_LIMIT, TokenReader};

use std::io::{BufRead, Write};

use log::{debug, info};
use prime_range_domain::PrimeRange;
use prime_range_shared_kernel::{InputError, InputResult};

use crate::error::{AppError, Result};

pub const START_PROMPT: &str = "Please enter the start of the range (non-negative integer): ";
pub const END_PROMPT: &str = "Please enter the end of the range (non-negative integer): ";

/// Prompts on `out` until `tokens` yields a valid `(start, end)` pair.
///
/// Validation messages are written to `out` prefixed with `Error: `. With
/// `prompts` disabled only those messages are written.
///
/// # Errors
///
/// Returns [`AppError::EndOfInput`] when the input ends before a valid pair
/// was read, and [`AppError::Io`] when reading or writing fails.
pub fn acquire_range<R, W>(tokens: &mut TokenReader<R>, out: &mut W, prompts: bool) -> Result<PrimeRange>
where
    R: BufRead,
    W: Write,
{
    let mut attempts = 0usize;
    loop {
        attempts += 1;
        match read_attempt(tokens, out, prompts)? {
            Ok(range) => {
                info!("accepted range {range} after {attempts} attempt(s)");
                return Ok(range);
            }
            Err(err) => {
                debug!("attempt {attempts} rejected: {err:?}");
                writeln!(out, "Error: {err}")?;
                if matches!(err, InputError::Parse { .. }) {
                    tokens.discard_line();
                }
            }
        }
    }
}

/// One pass through both prompts. The outer `Result` is fatal, the inner one
/// asks for another attempt.
fn read_attempt<R, W>(tokens: &mut TokenReader<R>, out: &mut W, prompts: bool) -> Result<InputResult<PrimeRange>>
where
    R: BufRead,
    W: Write,
{
    prompt(out, START_PROMPT, prompts)?;
    let start = match read_integer(tokens)? {
        Ok(value) => value,
        Err(err) => return Ok(Err(err)),
    };

    prompt(out, END_PROMPT, prompts)?;
    let end = match read_integer(tokens)? {
        Ok(value) => value,
        Err(err) => return Ok(Err(err)),
    };

    Ok(PrimeRange::new(start, end).map_err(InputError::from))
}

fn read_integer<R: BufRead>(tokens: &mut TokenReader<R>) -> Result<InputResult<i32>> {
    let token = tokens.next_token()?.ok_or(AppError::EndOfInput)?;
    Ok(token.parse::<i32>().map_err(|_| InputError::Parse { token }))
}

fn prompt<W: Write>(out: &mut W, text: &str, enabled: bool) -> Result<()> {
    if enabled {
        write!(out, "{text}")?;
        out.flush()?;
    }
    Ok(())
}
