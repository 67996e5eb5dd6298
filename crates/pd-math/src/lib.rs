//! # pd-math
//!
//! Special functions, 1D root solvers, and the probability distributions
//! built on them.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Probability distributions.
pub mod distributions;

/// 1D root-finding solvers.
pub mod solvers1d;

/// Log-gamma, factorials, and incomplete gamma functions.
pub mod special;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use distributions::{Poisson, PoissonDistribution, PoissonF32};
pub use special::{gamma_p, gamma_p_inva, gamma_q, gamma_q_inva, log_gamma};
