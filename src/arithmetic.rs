//! Greatest common divisor and least common multiple over `f64`.
//!
//! The Euclidean algorithm runs directly on floating-point remainders. For
//! finite operands `fmod` is exact, so the loop always reaches a zero
//! remainder; non-finite operands never would, hence the iteration cap.

use tracing::{trace, warn};

use crate::config::GcdOptions;
use crate::error::{NumericError, Result};

/// Strict GCD. Fails on non-finite operands or when `options.max_iterations`
/// is exhausted before the remainder reaches exactly `0.0`.
pub fn try_gcd(a: f64, b: f64, options: &GcdOptions) -> Result<f64> {
    if !a.is_finite() || !b.is_finite() {
        return Err(NumericError::NonFiniteOperand { a, b });
    }

    let (mut a, mut b) = (a, b);
    let mut iterations = 0;
    while b != 0.0 {
        if iterations == options.max_iterations {
            return Err(NumericError::GcdDidNotConverge { iterations });
        }
        let remainder = libm::fmod(a, b);
        a = b;
        b = remainder;
        iterations += 1;
    }

    trace!(iterations, "gcd converged");
    Ok(libm::fabs(a))
}

/// GCD of two reals, always non-negative. `gcd(0, 0)` is `0`.
///
/// Returns `NaN` where [`try_gcd`] would fail.
pub fn gcd(a: f64, b: f64) -> f64 {
    try_gcd(a, b, &GcdOptions::default()).unwrap_or_else(|err| {
        warn!(a, b, %err, "gcd abandoned");
        f64::NAN
    })
}

/// `|a × b| / gcd(a, b)`. Both operands zero gives `0 / 0 = NaN`.
pub fn lcm(a: f64, b: f64) -> f64 {
    libm::fabs(a * b) / gcd(a, b)
}

/// GCD folded over a slice; `None` when empty.
pub fn gcd_all(values: &[f64]) -> Option<f64> {
    let (first, rest) = values.split_first()?;
    Some(rest.iter().fold(libm::fabs(*first), |acc, &x| gcd(acc, x)))
}

/// LCM folded over a slice; `None` when empty.
pub fn lcm_all(values: &[f64]) -> Option<f64> {
    let (first, rest) = values.split_first()?;
    Some(rest.iter().fold(libm::fabs(*first), |acc, &x| lcm(acc, x)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_gcd_integral() {
        assert_eq!(gcd(12.0, 18.0), 6.0);
        assert_eq!(gcd(18.0, 12.0), 6.0);
        assert_eq!(gcd(17.0, 5.0), 1.0);
        assert_eq!(gcd(0.0, 9.0), 9.0);
        assert_eq!(gcd(9.0, 0.0), 9.0);
        assert_eq!(gcd(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_gcd_is_non_negative() {
        assert_eq!(gcd(-12.0, 18.0), 6.0);
        assert_eq!(gcd(12.0, -18.0), 6.0);
        assert_eq!(gcd(-12.0, -18.0), 6.0);
        assert_eq!(gcd(-7.0, 0.0), 7.0);
    }

    #[test]
    fn test_gcd_of_dyadic_fractions() {
        assert_eq!(gcd(1.5, 2.25), 0.75);
        assert_eq!(gcd(0.5, 0.125), 0.125);
    }

    #[test]
    fn test_gcd_of_inexact_decimals_still_terminates() {
        // 0.1 and 0.3 are not exact in binary; the answer is tiny but finite.
        let result = try_gcd(0.3, 0.1, &GcdOptions::default()).unwrap();
        assert!(result > 0.0);
        assert!(result <= 0.1);
    }

    #[test]
    fn test_non_finite_operands() {
        assert!(gcd(f64::NAN, 3.0).is_nan());
        assert!(gcd(5.0, f64::INFINITY).is_nan());
        assert!(matches!(
            try_gcd(5.0, f64::INFINITY, &GcdOptions::default()),
            Err(NumericError::NonFiniteOperand { .. })
        ));
    }

    #[test]
    fn test_iteration_cap() {
        // Consecutive Fibonacci numbers are the Euclidean worst case.
        let capped = GcdOptions::default().with_max_iterations(3);
        assert_eq!(
            try_gcd(89.0, 55.0, &capped),
            Err(NumericError::GcdDidNotConverge { iterations: 3 })
        );
        let roomy = GcdOptions::default().with_max_iterations(32);
        assert_eq!(try_gcd(89.0, 55.0, &roomy), Ok(1.0));
    }

    #[test]
    fn test_lcm() {
        assert_eq!(lcm(4.0, 6.0), 12.0);
        assert_eq!(lcm(-4.0, 6.0), 12.0);
        assert_eq!(lcm(7.0, 0.0), 0.0);
        assert!((lcm(1.5, 2.25) - 4.5).abs() < EPSILON);
    }

    #[test]
    fn test_lcm_of_two_zeros_is_nan() {
        assert!(lcm(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_lcm_times_gcd() {
        for (a, b) in [(4.0_f64, 6.0_f64), (21.0, 6.0), (-9.0, 12.0), (35.0, 64.0)] {
            assert_eq!(lcm(a, b) * gcd(a, b), (a * b).abs());
        }
    }

    #[test]
    fn test_folds() {
        assert_eq!(gcd_all(&[12.0, 18.0, 30.0]), Some(6.0));
        assert_eq!(lcm_all(&[2.0, 3.0, 4.0]), Some(12.0));
        assert_eq!(gcd_all(&[-8.0]), Some(8.0));
        assert_eq!(gcd_all(&[]), None);
        assert_eq!(lcm_all(&[]), None);
    }
}
