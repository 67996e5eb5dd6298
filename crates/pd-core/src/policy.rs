//! Error-reporting policies.
//!
//! Every distribution evaluator validates its arguments and hands invalid
//! ones to an [`ErrorPolicy`].  The policy decides whether the call fails
//! with [`Error::Domain`] or yields a quiet NaN in place of a result.  The
//! policy is a type parameter of the distribution, so the choice is made
//! once per distribution type and every evaluator honours it.

use std::fmt::Debug;

use crate::errors::{Error, Result};
use crate::float::FloatScalar;

/// Strategy invoked when an argument falls outside its domain.
pub trait ErrorPolicy: Debug + Clone + Copy + Default + PartialEq + Send + Sync + 'static {
    /// Report that `value` violates the constraint described by `message`
    /// in `function`.
    ///
    /// Returns the value the caller must hand back in place of a result,
    /// or the error it must propagate.
    fn domain_error<T: FloatScalar>(
        function: &'static str,
        message: &str,
        value: T,
    ) -> Result<T>;
}

/// Fail with [`Error::Domain`].  This is the default policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RaiseError;

impl ErrorPolicy for RaiseError {
    fn domain_error<T: FloatScalar>(
        function: &'static str,
        message: &str,
        value: T,
    ) -> Result<T> {
        Err(Error::Domain {
            function,
            message: message.replace("{value}", &value.to_string()),
        })
    }
}

/// Return a quiet NaN and let the computation continue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuietNan;

impl ErrorPolicy for QuietNan {
    fn domain_error<T: FloatScalar>(
        _function: &'static str,
        _message: &str,
        _value: T,
    ) -> Result<T> {
        Ok(T::nan())
    }
}

/// How a discrete distribution reports its quantiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DiscreteQuantile {
    /// The continuous value produced by inverting the incomplete gamma
    /// function, without rounding.
    Real,
    /// The smallest integer whose (complemented) cdf meets the target.
    #[default]
    IntegerRoundUp,
}
