//! # funcbasis
//!
//! Univariate basis systems (monomial, exponential, Fourier, B-spline) and
//! their roughness-penalty matrices, for regression and smoothing of
//! functional data.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `fb-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use funcbasis::prelude::*;
//!
//! let basis = Bspline::new((-1.0, 1.0), 8, 3).unwrap();
//! let x = basis.domain().linspace(9);
//! let design = basis.evaluate(x.as_slice(), 0).unwrap();
//! assert_eq!(design.cols(), 8);
//!
//! let roughness = basis.default_penalty(2).unwrap();
//! assert!(roughness.is_symmetric(1e-12));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use fb_core as core;

/// Matrix/array newtypes and quadrature.
pub use fb_math as math;

/// Basis systems.
pub use fb_basis as basis;

/// The types most callers need.
pub mod prelude {
    pub use fb_basis::{
        default_knots, Basis, BasisSpec, Bspline, Domain, Exponential, Fourier, Monomial,
        DEFAULT_ROMBERG_LEVEL,
    };
    pub use fb_core::{Error, Real, Result};
    pub use fb_math::{Array, Matrix};
}
