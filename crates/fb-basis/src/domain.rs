//! The closed interval a basis system is defined on.

use fb_core::{
    errors::{Error, Result},
    Real, Size,
};
use fb_math::Array;

/// Closed interval `[lower, upper]` covered by a basis system.
///
/// Both bounds are finite and `lower < upper`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "(Real, Real)", into = "(Real, Real)")
)]
pub struct Domain {
    lower: Real,
    upper: Real,
}

impl Domain {
    /// Build a domain from its bounds.
    ///
    /// # Errors
    /// Returns an error unless both bounds are finite and `lower < upper`.
    pub fn new(lower: Real, upper: Real) -> Result<Self> {
        fb_core::ensure!(
            lower.is_finite() && upper.is_finite(),
            "domain bounds must be finite, got ({lower}, {upper})"
        );
        fb_core::ensure!(
            lower < upper,
            "domain lower bound must be below the upper bound, got ({lower}, {upper})"
        );
        Ok(Self { lower, upper })
    }

    /// Build a domain from a slice holding exactly two bounds.
    ///
    /// # Example
    /// ```
    /// use fb_basis::Domain;
    /// assert!(Domain::from_slice(&[0.0, 1.0]).is_ok());
    /// assert!(Domain::from_slice(&[0.0, 0.5, 1.0]).is_err());
    /// ```
    pub fn from_slice(bounds: &[Real]) -> Result<Self> {
        match bounds {
            [lower, upper] => Self::new(*lower, *upper),
            _ => Err(Error::InvalidArgument(format!(
                "domain must be of length 2, got {}",
                bounds.len()
            ))),
        }
    }

    /// Lower bound.
    pub fn lower(&self) -> Real {
        self.lower
    }

    /// Upper bound.
    pub fn upper(&self) -> Real {
        self.upper
    }

    /// `upper - lower`.
    pub fn length(&self) -> Real {
        self.upper - self.lower
    }

    /// Return `true` if `x` lies in the closed interval. NaN never does.
    pub fn contains(&self, x: Real) -> bool {
        self.lower <= x && x <= self.upper
    }

    /// Fail with [`Error::OutOfDomain`] on the first sample outside the domain.
    pub fn check_contains(&self, xs: &[Real]) -> Result<()> {
        match xs.iter().find(|&&x| !self.contains(x)) {
            Some(&value) => Err(Error::OutOfDomain {
                value,
                lower: self.lower,
                upper: self.upper,
            }),
            None => Ok(()),
        }
    }

    /// `n` equally spaced points spanning the domain.
    pub fn linspace(&self, n: Size) -> Array {
        Array::linspace(self.lower, self.upper, n)
    }
}

impl TryFrom<(Real, Real)> for Domain {
    type Error = Error;
    fn try_from((lower, upper): (Real, Real)) -> Result<Self> {
        Self::new(lower, upper)
    }
}

impl TryFrom<&[Real]> for Domain {
    type Error = Error;
    fn try_from(bounds: &[Real]) -> Result<Self> {
        Self::from_slice(bounds)
    }
}

impl From<Domain> for (Real, Real) {
    fn from(d: Domain) -> Self {
        (d.lower, d.upper)
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_length_is_checked() {
        assert!(matches!(
            Domain::from_slice(&[0.0]),
            Err(Error::InvalidArgument(_))
        ));
        assert!(Domain::from_slice(&[0.0, 1.0, 2.0]).is_err());
        let d = Domain::from_slice(&[-1.0, 1.0]).unwrap();
        assert_eq!(d.length(), 2.0);
    }

    #[test]
    fn bounds_must_be_ordered_and_finite() {
        assert!(Domain::new(1.0, 0.0).is_err());
        assert!(Domain::new(1.0, 1.0).is_err());
        assert!(Domain::new(0.0, f64::INFINITY).is_err());
        assert!(Domain::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn membership() {
        let d = Domain::new(0.0, 1.0).unwrap();
        assert!(d.contains(0.0));
        assert!(d.contains(1.0));
        assert!(!d.contains(1.0 + 1e-12));
        assert!(!d.contains(f64::NAN));
        assert!(d.check_contains(&[0.0, 0.5, 1.0]).is_ok());
        assert_eq!(
            d.check_contains(&[0.5, -0.25, 2.0]),
            Err(Error::OutOfDomain {
                value: -0.25,
                lower: 0.0,
                upper: 1.0
            })
        );
    }

    #[test]
    fn conversions() {
        let d = Domain::try_from((2.0, 3.0)).unwrap();
        let pair: (Real, Real) = d.into();
        assert_eq!(pair, (2.0, 3.0));
        assert_eq!(d.to_string(), "[2, 3]");
        assert_eq!(d.linspace(3).as_slice(), &[2.0, 2.5, 3.0]);
    }
}
