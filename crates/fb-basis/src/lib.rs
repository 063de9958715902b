//! # fb-basis
//!
//! Univariate basis systems for functional data analysis. Every family
//! implements the [`Basis`] trait, which evaluates derivative matrices at
//! sample locations and assembles roughness penalties
//! `P[i, j] = ∫ B_i^(q)(t) B_j^(q)(t) dt`.
//!
//! | family          | evaluation   | penalty                                  |
//! |-----------------|--------------|------------------------------------------|
//! | [`Monomial`]    | closed form  | closed form                              |
//! | [`Exponential`] | closed form  | closed form                              |
//! | [`Fourier`]     | closed form  | closed form over a full period, Romberg otherwise |
//! | [`Bspline`]     | Cox–de Boor  | Romberg per knot span                    |

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// The `Basis` trait and shared quadrature.
pub mod basis;

/// B-spline basis.
pub mod bspline;

/// Declarative basis configuration.
pub mod config;

/// Domain interval.
pub mod domain;

/// Exponential basis.
pub mod exponential;

/// Fourier basis.
pub mod fourier;

/// Monomial basis.
pub mod monomial;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use basis::{quadrature_penalty, Basis, BasisCore, DEFAULT_ROMBERG_LEVEL};
pub use bspline::{default_knots, Bspline};
pub use config::BasisSpec;
pub use domain::Domain;
pub use exponential::Exponential;
pub use fourier::Fourier;
pub use monomial::Monomial;
