// crates/domain/src/lib.rs
//! Prime enumeration over closed integer ranges.
//!
//! The pipeline is `sieve -> range filter -> statistics`; each stage is a pure
//! function that allocates its result fresh on every call.

pub mod range;
pub mod sieve;
pub mod statistics;

pub use range::{PrimeRange, find_primes_in_range};
pub use sieve::sieve_of_eratosthenes;
pub use statistics::{LAST_PRIMES_SHOWN, PrimeStatistics, prime_statistics};
