//! Declarative description of a basis system.
//!
//! A [`BasisSpec`] names a family and its parameters; [`BasisSpec::build`]
//! runs the same validation as the constructors and returns the basis as a
//! trait object. With the `serde` feature the enum (de)serializes with an
//! internal `family` tag, e.g.
//! `{"family": "bspline", "domain": [0.0, 1.0], "n_basis": 8, "order": 4}`.

use fb_core::{errors::Result, Real, Size};

use crate::basis::Basis;
use crate::bspline::Bspline;
use crate::exponential::Exponential;
use crate::fourier::Fourier;
use crate::monomial::Monomial;

/// Parameters of one basis system.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "family", rename_all = "snake_case"))]
pub enum BasisSpec {
    /// [`Monomial`] basis.
    Monomial {
        /// Domain bounds.
        domain: (Real, Real),
        /// Number of basis functions.
        n_basis: Size,
    },
    /// [`Exponential`] basis; `theta` defaults to `0..K`.
    Exponential {
        /// Domain bounds.
        domain: (Real, Real),
        /// Number of basis functions.
        n_basis: Size,
        /// Rates, one per basis function.
        #[cfg_attr(feature = "serde", serde(default))]
        theta: Option<Vec<Real>>,
    },
    /// [`Fourier`] basis; `period` defaults to the domain length.
    Fourier {
        /// Domain bounds.
        domain: (Real, Real),
        /// Number of basis functions (odd).
        n_basis: Size,
        /// Period of the trigonometric terms.
        #[cfg_attr(feature = "serde", serde(default))]
        period: Option<Real>,
    },
    /// [`Bspline`] basis; `knots` default to [`default_knots`](crate::default_knots).
    Bspline {
        /// Domain bounds.
        domain: (Real, Real),
        /// Number of basis functions.
        n_basis: Size,
        /// Spline order (degree + 1).
        order: Size,
        /// Explicit knot vector of length `n_basis + order`.
        #[cfg_attr(feature = "serde", serde(default))]
        knots: Option<Vec<Real>>,
    },
}

impl BasisSpec {
    /// Short name of the family.
    pub fn family(&self) -> &'static str {
        match self {
            BasisSpec::Monomial { .. } => "monomial",
            BasisSpec::Exponential { .. } => "exponential",
            BasisSpec::Fourier { .. } => "fourier",
            BasisSpec::Bspline { .. } => "bspline",
        }
    }

    /// Validate the parameters and construct the basis.
    ///
    /// # Example
    /// ```
    /// use fb_basis::{Basis, BasisSpec};
    /// let spec = BasisSpec::Fourier { domain: (0.0, 1.0), n_basis: 5, period: None };
    /// let basis = spec.build().unwrap();
    /// assert_eq!(basis.n_basis(), 5);
    /// ```
    pub fn build(&self) -> Result<Box<dyn Basis>> {
        let basis: Box<dyn Basis> = match self {
            BasisSpec::Monomial { domain, n_basis } => Box::new(Monomial::new(*domain, *n_basis)?),
            BasisSpec::Exponential {
                domain,
                n_basis,
                theta,
            } => Box::new(match theta {
                Some(theta) => Exponential::with_theta(*domain, *n_basis, theta)?,
                None => Exponential::new(*domain, *n_basis)?,
            }),
            BasisSpec::Fourier {
                domain,
                n_basis,
                period,
            } => Box::new(match period {
                Some(period) => Fourier::with_period(*domain, *n_basis, *period)?,
                None => Fourier::new(*domain, *n_basis)?,
            }),
            BasisSpec::Bspline {
                domain,
                n_basis,
                order,
                knots,
            } => Box::new(match knots {
                Some(knots) => Bspline::with_knots(*domain, *n_basis, *order, knots)?,
                None => Bspline::new(*domain, *n_basis, *order)?,
            }),
        };
        Ok(basis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_every_family() {
        let specs = [
            BasisSpec::Monomial {
                domain: (0.0, 1.0),
                n_basis: 4,
            },
            BasisSpec::Exponential {
                domain: (0.0, 1.0),
                n_basis: 4,
                theta: Some(vec![-1.0, 0.0, 1.0, 2.0]),
            },
            BasisSpec::Fourier {
                domain: (0.0, 1.0),
                n_basis: 5,
                period: Some(2.0),
            },
            BasisSpec::Bspline {
                domain: (0.0, 1.0),
                n_basis: 6,
                order: 4,
                knots: None,
            },
        ];
        let families: Vec<&str> = specs.iter().map(BasisSpec::family).collect();
        assert_eq!(families, ["monomial", "exponential", "fourier", "bspline"]);
        for spec in &specs {
            let basis = spec.build().unwrap();
            let x = basis.domain().linspace(5);
            let m = basis.evaluate(x.as_slice(), 0).unwrap();
            assert_eq!(m.cols(), basis.n_basis());
        }
    }

    #[test]
    fn invalid_parameters_fail_to_build() {
        let even = BasisSpec::Fourier {
            domain: (0.0, 1.0),
            n_basis: 4,
            period: None,
        };
        assert!(even.build().is_err());
        let short_knots = BasisSpec::Bspline {
            domain: (0.0, 1.0),
            n_basis: 6,
            order: 4,
            knots: Some(vec![0.0, 1.0]),
        };
        assert!(short_knots.build().is_err());
    }
}
