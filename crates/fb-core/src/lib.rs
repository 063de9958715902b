//! # fb-core
//!
//! Core types and error definitions for funcbasis.
//!
//! This crate provides the foundational building blocks shared across the
//! other crates in the workspace: the numeric type aliases, the error
//! hierarchy with its `ensure!` macro, and the coercion of
//! numeric-like inputs into counts.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Coercion of numeric-like values into counts.
pub mod count;

/// Error types and the `ensure!` macro.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Alias used for array sizes / indices.
pub type Size = usize;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use count::{to_count, to_positive_count};
pub use errors::{Error, Result};
