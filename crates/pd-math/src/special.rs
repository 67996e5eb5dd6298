//! Special functions used by the distributions.
//!
//! Log-gamma, factorials and the regularized incomplete gamma functions
//! delegate to `statrs`.  The inverses of the incomplete gamma functions
//! with respect to the shape parameter are solved here by bracketing the
//! root and refining it with [`brent`].

use pd_core::{
    ensure,
    errors::{Error, Result},
    Real,
};
use statrs::function::{factorial as statrs_factorial, gamma};

use crate::solvers1d::{bisection, brent};

const INVERSE_ACCURACY: Real = 1.0e-12;

// Q(a, x) is 1 to machine precision long before a reaches this.
const MAX_SHAPE: Real = 1.0e15;

/// The natural logarithm of the gamma function, ln Γ(x).
pub fn log_gamma(x: Real) -> Real {
    gamma::ln_gamma(x)
}

/// `n!` as a float; `+∞` once `n` exceeds 170.
pub fn factorial(n: u32) -> Real {
    statrs_factorial::factorial(u64::from(n))
}

/// The regularized lower incomplete gamma function P(a, x).
pub fn gamma_p(a: Real, x: Real) -> Result<Real> {
    gamma::checked_gamma_lr(a, x)
        .map_err(|e| Error::Runtime(format!("gamma_p({a}, {x}): {e}")))
}

/// The regularized upper incomplete gamma function Q(a, x) = 1 − P(a, x).
pub fn gamma_q(a: Real, x: Real) -> Result<Real> {
    gamma::checked_gamma_ur(a, x)
        .map_err(|e| Error::Runtime(format!("gamma_q({a}, {x}): {e}")))
}

/// The shape `a` such that Q(a, x) = q.
///
/// Q(a, x) rises from 0 to 1 as `a` grows, so `q = 0` maps to the smallest
/// positive shape and `q = 1` to `+∞`.
pub fn gamma_q_inva(x: Real, q: Real) -> Result<Real> {
    ensure!(
        x.is_finite() && x > 0.0,
        "gamma_q_inva: x must be finite and > 0, got {x}"
    );
    ensure!(
        (0.0..=1.0).contains(&q),
        "gamma_q_inva: q must be in [0, 1], got {q}"
    );
    if q == 0.0 {
        return Ok(Real::MIN_POSITIVE);
    }
    if q == 1.0 {
        return Ok(Real::INFINITY);
    }
    invert_shape(|a| Ok(gamma_q(a, x)? - q), x)
}

/// The shape `a` such that P(a, x) = p.
///
/// P(a, x) falls from 1 to 0 as `a` grows, so `p = 1` maps to the smallest
/// positive shape and `p = 0` to `+∞`.
pub fn gamma_p_inva(x: Real, p: Real) -> Result<Real> {
    ensure!(
        x.is_finite() && x > 0.0,
        "gamma_p_inva: x must be finite and > 0, got {x}"
    );
    ensure!(
        (0.0..=1.0).contains(&p),
        "gamma_p_inva: p must be in [0, 1], got {p}"
    );
    if p == 1.0 {
        return Ok(Real::MIN_POSITIVE);
    }
    if p == 0.0 {
        return Ok(Real::INFINITY);
    }
    invert_shape(|a| Ok(p - gamma_p(a, x)?), x)
}

/// Root of `residual`, which must increase with the shape `a`.
fn invert_shape<F>(residual: F, x: Real) -> Result<Real>
where
    F: Fn(Real) -> Result<Real>,
{
    let mut lo = 1.0;
    while residual(lo)? > 0.0 {
        lo *= 0.5;
        if lo < Real::MIN_POSITIVE {
            return Ok(Real::MIN_POSITIVE);
        }
    }

    let mut hi = (x + 10.0 * x.sqrt() + 10.0).max(2.0 * lo);
    while residual(hi)? < 0.0 {
        lo = hi;
        hi *= 2.0;
        if hi > MAX_SHAPE {
            return Ok(Real::INFINITY);
        }
    }

    match brent(&residual, lo, hi, INVERSE_ACCURACY) {
        Err(Error::Runtime(_)) => bisection(&residual, lo, hi, INVERSE_ACCURACY),
        found => found,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn factorial_table() {
        assert_eq!(factorial(0), 1.0);
        assert_eq!(factorial(5), 120.0);
        assert_relative_eq!(factorial(20), 2_432_902_008_176_640_000.0, max_relative = 1e-15);
        assert!(factorial(170).is_finite());
        assert!(factorial(171).is_infinite());
    }

    #[test]
    fn log_gamma_matches_factorial() {
        for n in [1_u32, 5, 10, 50, 100] {
            assert_relative_eq!(
                log_gamma(f64::from(n) + 1.0),
                factorial(n).ln(),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn incomplete_gamma_complements() {
        for &(a, x) in &[(1.0, 0.5), (3.0, 2.0), (10.5, 12.0), (50.0, 40.0)] {
            let p = gamma_p(a, x).unwrap();
            let q = gamma_q(a, x).unwrap();
            assert_relative_eq!(p + q, 1.0, epsilon = 1e-12);
        }
        // P(1, x) = 1 − e^{−x}
        assert_relative_eq!(gamma_p(1.0, 2.0).unwrap(), 1.0 - (-2.0_f64).exp(), epsilon = 1e-14);
    }

    #[test]
    fn incomplete_gamma_rejects_bad_shape() {
        assert!(matches!(gamma_q(-1.0, 2.0), Err(Error::Runtime(_))));
    }

    #[test]
    fn q_inverse_roundtrip() {
        for &x in &[0.5, 4.0, 10.0, 250.0] {
            for &q in &[0.01, 0.3, 0.5, 0.9, 0.999] {
                let a = gamma_q_inva(x, q).unwrap();
                assert_relative_eq!(gamma_q(a, x).unwrap(), q, max_relative = 1e-8);
            }
        }
    }

    #[test]
    fn p_inverse_roundtrip() {
        for &x in &[0.5, 4.0, 10.0, 250.0] {
            for &p in &[0.001, 0.1, 0.5, 0.7, 0.99] {
                let a = gamma_p_inva(x, p).unwrap();
                assert_relative_eq!(gamma_p(a, x).unwrap(), p, max_relative = 1e-8);
            }
        }
    }

    #[test]
    fn inverse_edges() {
        assert_eq!(gamma_q_inva(3.0, 0.0).unwrap(), f64::MIN_POSITIVE);
        assert_eq!(gamma_q_inva(3.0, 1.0).unwrap(), f64::INFINITY);
        assert_eq!(gamma_p_inva(3.0, 1.0).unwrap(), f64::MIN_POSITIVE);
        assert_eq!(gamma_p_inva(3.0, 0.0).unwrap(), f64::INFINITY);
        assert!(matches!(gamma_q_inva(3.0, 1.5), Err(Error::Precondition(_))));
        assert!(matches!(gamma_p_inva(0.0, 0.5), Err(Error::Precondition(_))));
    }
}
