//! # poisson
//!
//! Numerically stable evaluation of the Poisson distribution: mass,
//! cumulative and complemented cumulative probabilities, quantiles, and
//! moments, generic over `f32` / `f64` and over the policy applied to
//! out-of-domain arguments.
//!
//! This crate is a **façade** that re-exports the public items of the
//! workspace crates.
//!
//! ## Quick start
//!
//! ```rust
//! use poisson::{Poisson, PoissonDistribution, QuietNan};
//!
//! let d = Poisson::new(10.0).unwrap();
//! let k = d.median().unwrap();
//! assert!(d.cdf(k).unwrap() >= 0.5);
//! assert!(d.cdf(k - 1.0).unwrap() < 0.5);
//!
//! // Domain errors either propagate or turn into NaN, per policy.
//! assert!(d.quantile(1.5).is_err());
//! let quiet = PoissonDistribution::<f64, QuietNan>::new(10.0).unwrap();
//! assert!(quiet.quantile(1.5).unwrap().is_nan());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types, policies, and the element trait.
pub use pd_core as core;

/// Special functions, solvers, and distributions.
pub use pd_math as math;

pub use pd_core::{DiscreteQuantile, Error, ErrorPolicy, FloatScalar, QuietNan, RaiseError, Result};
pub use pd_math::distributions::{Poisson, PoissonDistribution, PoissonF32};

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn facade_reexports() {
        let d = Poisson::new(4.0).unwrap();
        assert_relative_eq!(d.pdf(4.0).unwrap(), 0.195_366_814_813_165, max_relative = 1e-12);
        assert_relative_eq!(math::gamma_q(5.0, 4.0).unwrap(), d.cdf(4.0).unwrap());
        assert!(matches!(d.pdf(-1.0), Err(Error::Domain { .. })));
    }
}
