//! `Array` — a one-dimensional vector of reals.
//!
//! A thin newtype around `nalgebra::DVector<f64>` used for knot vectors,
//! rate vectors and sample grids.

use nalgebra::DVector;
use fb_core::{Real, Size};
use std::ops::Index;

/// A dynamically-sized 1D vector of `Real` values.
#[derive(Debug, Clone, PartialEq)]
pub struct Array(DVector<Real>);

impl Array {
    /// Create a zero-filled array of length `n`.
    pub fn zeros(n: Size) -> Self {
        Self(DVector::zeros(n))
    }

    /// Create an array from a slice.
    pub fn from_slice(data: &[Real]) -> Self {
        Self(DVector::from_column_slice(data))
    }

    /// Create an array from a `Vec`.
    pub fn from_vec(data: Vec<Real>) -> Self {
        Self(DVector::from_vec(data))
    }

    /// `n` equally spaced points from `start` to `stop`, both included.
    ///
    /// With `n == 1` the single point is `start`.
    pub fn linspace(start: Real, stop: Real, n: Size) -> Self {
        match n {
            0 => Self::zeros(0),
            1 => Self::from_vec(vec![start]),
            _ => {
                let step = (stop - start) / (n - 1) as Real;
                let mut data: Vec<Real> = (0..n).map(|i| start + i as Real * step).collect();
                // pin the end point against rounding in the step
                data[n - 1] = stop;
                Self::from_vec(data)
            }
        }
    }

    /// Number of elements.
    pub fn size(&self) -> Size {
        self.0.len()
    }

    /// Return `true` if empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the elements as a slice.
    pub fn as_slice(&self) -> &[Real] {
        self.0.as_slice()
    }

    /// Borrow the inner `DVector`.
    pub fn inner(&self) -> &DVector<Real> {
        &self.0
    }

    /// Iterator over elements.
    pub fn iter(&self) -> impl Iterator<Item = &Real> {
        self.0.iter()
    }

    /// Return `true` if every element is strictly greater than the previous one.
    pub fn is_strictly_increasing(&self) -> bool {
        self.as_slice().windows(2).all(|w| w[0] < w[1])
    }

    /// Return `true` if no element is smaller than the previous one.
    pub fn is_non_decreasing(&self) -> bool {
        self.as_slice().windows(2).all(|w| w[0] <= w[1])
    }
}

// ── Index ─────────────────────────────────────────────────────────────────────

impl Index<usize> for Array {
    type Output = Real;
    fn index(&self, i: usize) -> &Real {
        &self.0[i]
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Array {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_end_points() {
        let a = Array::linspace(-1.0, 1.0, 7);
        assert_eq!(a.size(), 7);
        assert_eq!(a[0], -1.0);
        assert_eq!(a[6], 1.0);
        assert!((a[3]).abs() < 1e-15);
        assert!((a[1] + 2.0 / 3.0).abs() < 1e-15);
    }

    #[test]
    fn linspace_degenerate_sizes() {
        assert!(Array::linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(Array::linspace(2.0, 5.0, 1).as_slice(), &[2.0]);
    }

    #[test]
    fn monotonicity() {
        let a = Array::from_slice(&[0.0, 1.0, 2.0]);
        let b = Array::from_slice(&[0.0, 1.0, 1.0, 2.0]);
        let c = Array::from_slice(&[0.0, 2.0, 1.0]);
        assert!(a.is_strictly_increasing());
        assert!(!b.is_strictly_increasing());
        assert!(b.is_non_decreasing());
        assert!(!c.is_non_decreasing());
    }

    #[test]
    fn display() {
        let a = Array::from_slice(&[1.0, 2.5]);
        assert_eq!(a.to_string(), "[1, 2.5]");
    }
}
