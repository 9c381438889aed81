//! The gamma function and its logarithm.

use std::f64::consts::PI;

/// Computes the logarithm of the gamma function `ln Γ(x)` with the
/// Lanczos approximation.
///
/// # Accuracy
///
/// Relative error below `2e-10` for `x > 0`. Values below `0.5` go
/// through the reflection formula.
///
/// # Examples
///
/// ```
/// use binoplot::function::gamma;
///
/// // Γ(5) = 4! = 24
/// assert!((gamma::ln_gamma(5.0) - 24.0_f64.ln()).abs() < 1e-10);
/// ```
pub fn ln_gamma(x: f64) -> f64 {
    #[allow(clippy::excessive_precision)]
    const COEFFICIENTS: [f64; 9] = [
        0.99999999999980993,
        676.5203681218851,
        -1259.1392167224028,
        771.32342877765313,
        -176.61502916214059,
        12.507343278686905,
        -0.13857109526572012,
        9.9843695780195716e-6,
        1.5056327351493116e-7,
    ];
    const G: f64 = 7.0;

    if x < 0.5 {
        // reflection: Γ(x) Γ(1-x) = π / sin(πx)
        return (PI / (PI * x).sin()).ln() - ln_gamma(1.0 - x);
    }

    let x = x - 1.0;
    let mut sum = COEFFICIENTS[0];
    for (i, &c) in COEFFICIENTS[1..].iter().enumerate() {
        sum += c / (x + i as f64 + 1.0);
    }

    let t = x + G + 0.5;
    0.5 * (2.0 * PI).ln() + (x + 0.5) * t.ln() - t + sum.ln()
}

/// Computes the gamma function `Γ(x) = exp(ln Γ(x))`.
pub fn gamma(x: f64) -> f64 {
    ln_gamma(x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prec::assert_almost_eq;

    #[test]
    fn test_ln_gamma_integers() {
        assert_almost_eq(ln_gamma(1.0), 0.0, 1e-10);
        assert_almost_eq(ln_gamma(2.0), 0.0, 1e-10);
        assert_almost_eq(ln_gamma(3.0), 2.0_f64.ln(), 1e-10);
        assert_almost_eq(ln_gamma(5.0), 24.0_f64.ln(), 1e-10);
        assert_almost_eq(ln_gamma(7.0), 720.0_f64.ln(), 1e-9);
        assert_almost_eq(ln_gamma(11.0), 3628800.0_f64.ln(), 1e-9);
    }

    #[test]
    fn test_ln_gamma_half() {
        // Γ(1/2) = √π
        assert_almost_eq(ln_gamma(0.5), std::f64::consts::PI.sqrt().ln(), 1e-10);
        // Γ(3/2) = √π / 2
        assert_almost_eq(
            ln_gamma(1.5),
            (std::f64::consts::PI.sqrt() / 2.0).ln(),
            1e-10,
        );
    }

    #[test]
    fn test_gamma() {
        assert_almost_eq(gamma(5.0), 24.0, 1e-8);
        assert_almost_eq(gamma(0.5), std::f64::consts::PI.sqrt(), 1e-10);
    }
}
