//! Factorials and binomial coefficients.

use crate::function::gamma;
use std::sync::OnceLock;

/// The largest `n` for which `n!` is representable as an `f64`.
pub const MAX_FACTORIAL: usize = 170;

fn fcache() -> &'static [f64; MAX_FACTORIAL + 1] {
    static CACHE: OnceLock<[f64; MAX_FACTORIAL + 1]> = OnceLock::new();
    CACHE.get_or_init(|| {
        let mut cache = [1.0; MAX_FACTORIAL + 1];
        for i in 1..=MAX_FACTORIAL {
            cache[i] = cache[i - 1] * i as f64;
        }
        cache
    })
}

/// Computes the factorial `n!`, returning `f64::INFINITY` for
/// `n > 170` where the result overflows an `f64`.
///
/// # Examples
///
/// ```
/// use binoplot::function::factorial;
///
/// assert_eq!(factorial::factorial(10), 3628800.0);
/// ```
pub fn factorial(n: u64) -> f64 {
    let n = n as usize;
    fcache().get(n).copied().unwrap_or(f64::INFINITY)
}

/// Computes the logarithm of the factorial `ln n!`, falling back to
/// `ln Γ(n + 1)` beyond the cached range.
pub fn ln_factorial(n: u64) -> f64 {
    let n = n as usize;
    fcache()
        .get(n)
        .map(|&f| f.ln())
        .unwrap_or_else(|| gamma::ln_gamma(n as f64 + 1.0))
}

/// Computes the binomial coefficient `n choose k`, the number of ways
/// to pick `k` items out of `n`.
///
/// Returns `0.0` for `k > n`.
///
/// # Examples
///
/// ```
/// use binoplot::function::factorial;
///
/// assert_eq!(factorial::binomial(5, 2), 10.0);
/// assert_eq!(factorial::binomial(5, 6), 0.0);
/// ```
pub fn binomial(n: u64, k: u64) -> f64 {
    if k > n {
        0.0
    } else {
        (0.5 + ln_binomial(n, k).exp()).floor()
    }
}

/// Computes the logarithm of the binomial coefficient, `ln (n choose k)`.
///
/// Returns `f64::NEG_INFINITY` for `k > n`.
pub fn ln_binomial(n: u64, k: u64) -> f64 {
    if k > n {
        f64::NEG_INFINITY
    } else {
        ln_factorial(n) - ln_factorial(k) - ln_factorial(n - k)
    }
}
