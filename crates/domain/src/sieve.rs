// crates/domain/src/sieve.rs
use log::debug;

/// Returns every prime `p` with `2 <= p <= n`, in ascending order.
///
/// Any `n < 2`, negative values included, yields an empty vector.
///
/// Classic Sieve of Eratosthenes: each surviving candidate `p` strikes its
/// multiples starting at `p * p`, since every smaller multiple already has a
/// smaller prime factor.
///
/// # Examples
///
/// ```
/// use prime_range_domain::sieve_of_eratosthenes;
///
/// assert_eq!(sieve_of_eratosthenes(10), vec![2, 3, 5, 7]);
/// assert!(sieve_of_eratosthenes(1).is_empty());
/// ```
pub fn sieve_of_eratosthenes(n: i32) -> Vec<i32> {
    if n < 2 {
        return Vec::new();
    }
    // Every positive `i32` fits in `usize` on the targets std supports.
    let Ok(limit) = usize::try_from(n) else {
        return Vec::new();
    };

    let mut is_prime = vec![true; limit + 1];
    is_prime[0] = false;
    is_prime[1] = false;

    let mut p = 2usize;
    // `p <= limit / p` is `p * p <= limit` without the overflow.
    while p <= limit / p {
        if is_prime[p] {
            for multiple in (p * p..=limit).step_by(p) {
                is_prime[multiple] = false;
            }
        }
        p += 1;
    }

    let primes: Vec<i32> = is_prime
        .iter()
        .enumerate()
        .filter(|&(_, &prime)| prime)
        .filter_map(|(index, _)| i32::try_from(index).ok())
        .collect();

    debug!("sieve up to {n}: {} primes", primes.len());
    primes
}
