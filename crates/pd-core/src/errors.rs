//! Error types for poisson-rs.
//!
//! A single `thiserror`-derived enum covers every failure the library can
//! report.  Invalid distribution arguments surface as [`Error::Domain`];
//! the [`ensure!`](crate::ensure) and [`fail!`](crate::fail) macros cover
//! the preconditions and runtime failures of the numerical helpers.

use thiserror::Error;

/// The top-level error type used throughout poisson-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// An argument lies outside the domain of the function that received it.
    #[error("domain error in {function}: {message}")]
    Domain {
        /// Name of the reporting function.
        function: &'static str,
        /// Description of the violated constraint, including the offending value.
        message: String,
    },

    /// Precondition violated (raised by [`ensure!`](crate::ensure)).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// General runtime error (raised by [`fail!`](crate::fail)).
    #[error("{0}")]
    Runtime(String),
}

impl Error {
    /// Return `true` for [`Error::Domain`].
    pub fn is_domain(&self) -> bool {
        matches!(self, Error::Domain { .. })
    }
}

/// Shorthand `Result` type used throughout poisson-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use pd_core::{ensure, errors::Error};
/// fn positive(x: f64) -> pd_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(matches!(positive(-1.0), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use pd_core::{fail, errors::Error};
/// fn always_err() -> pd_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
