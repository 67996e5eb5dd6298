//! # pd-core
//!
//! Core types, traits, and error definitions for poisson-rs.
//!
//! This crate provides the building blocks shared by the distribution
//! crates: the error hierarchy and its macros, the error-reporting
//! policies, and the floating-point element trait.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Floating-point element trait.
pub mod float;

/// Domain-error and discrete-quantile policies.
pub mod policy;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used by the special-function collaborators.
pub type Real = f64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use float::FloatScalar;
pub use policy::{DiscreteQuantile, ErrorPolicy, QuietNan, RaiseError};
