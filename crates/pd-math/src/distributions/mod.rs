//! Probability distributions.
//!
//! Each distribution is an immutable value generic over its element type
//! and its [`ErrorPolicy`](pd_core::ErrorPolicy).

pub mod poisson;

pub use poisson::{Poisson, PoissonDistribution, PoissonF32};
