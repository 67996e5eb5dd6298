//! Floating-point element trait shared by the distributions.

use std::fmt::{Debug, Display};

use num_traits::Float;

/// Real element type a distribution can be instantiated over.
///
/// Special functions are evaluated in `f64`; narrower types are promoted
/// through [`to_real`](FloatScalar::to_real) and rounded back with
/// [`from_real`](FloatScalar::from_real).
pub trait FloatScalar: Float + Debug + Display + Default + Send + Sync + 'static {
    /// Largest `n` for which `n!` is finite in this type.
    const MAX_FACTORIAL: u32;

    /// Widen to `f64`.
    fn to_real(self) -> f64;

    /// Round an `f64` to this type.
    fn from_real(x: f64) -> Self;

    /// Relative tolerance used when comparing two evaluations of the same
    /// quantity by different formulas.
    fn tolerance() -> Self {
        Self::epsilon() * Self::from_real(100.0)
    }
}

impl FloatScalar for f32 {
    const MAX_FACTORIAL: u32 = 34;

    #[inline]
    fn to_real(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn from_real(x: f64) -> Self {
        x as f32
    }
}

impl FloatScalar for f64 {
    const MAX_FACTORIAL: u32 = 170;

    #[inline]
    fn to_real(self) -> f64 {
        self
    }

    #[inline]
    fn from_real(x: f64) -> Self {
        x
    }
}
