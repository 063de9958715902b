//! # fb-math
//!
//! Mathematical utilities for funcbasis: matrix/array newtypes (over
//! nalgebra), Romberg quadrature, and floating-point comparison.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// One-dimensional `Array` newtype.
pub mod array;

/// Floating-point comparison utilities.
pub mod comparison;

/// Numerical integration.
pub mod integrals;

/// Two-dimensional `Matrix` newtype.
pub mod matrix;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use array::Array;
pub use comparison::{close, close_relative};
pub use integrals::{romb, RombergIntegral};
pub use matrix::Matrix;
