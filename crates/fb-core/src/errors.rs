//! Error types for funcbasis.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum below. Validation failures are raised
//! through the [`ensure!`](crate::ensure) macro.

use thiserror::Error;

use crate::Real;

/// The top-level error type used throughout funcbasis.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A sample location lies outside the domain of a basis system.
    #[error("argument {value} lies outside the domain [{lower}, {upper}] of the basis system")]
    OutOfDomain {
        /// The offending sample location.
        value: Real,
        /// Lower bound of the domain.
        lower: Real,
        /// Upper bound of the domain.
        upper: Real,
    },
}

/// Shorthand `Result` type used throughout funcbasis.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use fb_core::{ensure, errors::Error};
/// fn positive(x: f64) -> fb_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
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
