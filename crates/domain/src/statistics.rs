// crates/domain/src/statistics.rs
use prime_range_shared_kernel::PrimeCount;
use serde::Serialize;

use crate::range::find_primes_in_range;

/// How many of the greatest primes a summary keeps.
pub const LAST_PRIMES_SHOWN: usize = 3;

/// Count and trailing primes of a range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PrimeStatistics {
    /// Up to [`LAST_PRIMES_SHOWN`] greatest primes, ascending.
    pub last_three: Vec<i32>,
    pub count: PrimeCount,
}

impl PrimeStatistics {
    /// Builds a summary from an ascending prime sequence.
    ///
    /// Fewer than three primes are kept as they are, so `last_three` is always
    /// the suffix of length `min(3, count)`.
    pub fn from_primes(primes: &[i32]) -> Self {
        let tail = primes.len().saturating_sub(LAST_PRIMES_SHOWN);
        Self {
            last_three: primes[tail..].to_vec(),
            count: PrimeCount::from(primes.len()),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.last_three.is_empty()
    }
}

/// Counts the primes in `[start, end]` and keeps the last three of them.
///
/// ```
/// use prime_range_domain::prime_statistics;
///
/// let stats = prime_statistics(10, 20);
/// assert_eq!(stats.last_three, vec![13, 17, 19]);
/// assert_eq!(stats.count.value(), 4);
/// ```
pub fn prime_statistics(start: i32, end: i32) -> PrimeStatistics {
    PrimeStatistics::from_primes(&find_primes_in_range(start, end))
}
