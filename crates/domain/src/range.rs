// crates/domain/src/range.rs
use std::fmt;

use prime_range_shared_kernel::{DomainError, DomainResult};

use crate::sieve::sieve_of_eratosthenes;
use crate::statistics::{PrimeStatistics, prime_statistics};

/// Returns the primes `p` with `start <= p <= end`, ascending.
///
/// An inverted range or a negative bound yields an empty vector.
pub fn find_primes_in_range(start: i32, end: i32) -> Vec<i32> {
    if start > end || start < 0 || end < 0 {
        return Vec::new();
    }

    let mut primes = sieve_of_eratosthenes(end);
    primes.retain(|&p| p >= start);
    primes
}

/// Validated closed interval `[start, end]` with `0 <= start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrimeRange {
    start: i32,
    end: i32,
}

impl PrimeRange {
    /// Checks ordering first, then sign, so `(-1, -5)` reports a range-order
    /// error rather than a negative bound.
    pub fn new(start: i32, end: i32) -> DomainResult<Self> {
        if start > end {
            return Err(DomainError::RangeOrder { start, end });
        }
        if start < 0 || end < 0 {
            return Err(DomainError::NegativeBound { start, end });
        }
        Ok(Self { start, end })
    }

    #[inline]
    pub const fn start(&self) -> i32 {
        self.start
    }

    #[inline]
    pub const fn end(&self) -> i32 {
        self.end
    }

    pub fn statistics(&self) -> PrimeStatistics {
        prime_statistics(self.start, self.end)
    }
}

impl fmt::Display for PrimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
