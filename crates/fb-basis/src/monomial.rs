//! Monomial basis `B_k(t) = t^k`, `k = 0..K`.

use fb_core::{errors::Result, Real, Size};
use fb_math::Matrix;
use num_traits::ToPrimitive;

use crate::basis::{Basis, BasisCore};

/// The monomial basis system `{1, t, t², …, t^(K-1)}`.
///
/// Derivatives and penalties are exact.
#[derive(Debug, Clone, PartialEq)]
pub struct Monomial {
    core: BasisCore,
}

impl Monomial {
    /// Create a monomial basis of `n_basis` functions over `domain`.
    ///
    /// # Errors
    /// Returns an error if the domain is invalid or `n_basis` is not a
    /// positive integer.
    ///
    /// # Example
    /// ```
    /// use fb_basis::{Basis, Monomial};
    /// let basis = Monomial::new((0.0, 1.0), 3).unwrap();
    /// let m = basis.evaluate(&[0.5], 0).unwrap();
    /// assert_eq!(m.row(0).as_slice(), &[1.0, 0.5, 0.25]);
    /// ```
    pub fn new<K: ToPrimitive + Copy>(domain: (Real, Real), n_basis: K) -> Result<Self> {
        let core = BasisCore::new(domain, n_basis)?;
        log::debug!(
            "monomial basis: K={} on {}",
            core.n_basis(),
            core.domain()
        );
        Ok(Self { core })
    }
}

/// `n (n-1) … (n-q+1)`, the coefficient left after differentiating
/// `t^n` `q` times. Zero when `q > n`; one when `q == 0`.
pub fn descending_factorial(n: Size, q: Size) -> Real {
    if q > n {
        return 0.0;
    }
    (0..q).map(|i| (n - i) as Real).product()
}

impl Basis for Monomial {
    fn core(&self) -> &BasisCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut BasisCore {
        &mut self.core
    }

    fn evaluate_unchecked(&self, x: &[Real], q: Size) -> Matrix {
        let coefficients: Vec<Real> = (0..self.n_basis())
            .map(|k| descending_factorial(k, q))
            .collect();
        Matrix::from_fn(x.len(), self.n_basis(), |r, k| {
            if k < q {
                0.0
            } else {
                coefficients[k] * x[r].powi((k - q) as i32)
            }
        })
    }

    fn penalty(&self, q: Size, _level: u32) -> Result<Matrix> {
        let k = self.n_basis();
        let (lower, upper) = (self.domain().lower(), self.domain().upper());
        let mut gram = Matrix::zeros(k, k);
        for i in q..k {
            let ifac = descending_factorial(i, q);
            for j in i..k {
                let jfac = descending_factorial(j, q);
                let p = (i + j - 2 * q + 1) as i32;
                let value = (upper.powi(p) - lower.powi(p)) * ifac * jfac / p as Real;
                gram[(i, j)] = value;
                gram[(j, i)] = value;
            }
        }
        Ok(gram)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basis::quadrature_penalty;
    use approx::assert_abs_diff_eq;

    #[test]
    fn descending_factorials() {
        assert_eq!(descending_factorial(5, 0), 1.0);
        assert_eq!(descending_factorial(5, 2), 20.0);
        assert_eq!(descending_factorial(3, 3), 6.0);
        assert_eq!(descending_factorial(2, 3), 0.0);
        assert_eq!(descending_factorial(0, 1), 0.0);
    }

    #[test]
    fn derivatives_shift_powers() {
        let basis = Monomial::new((0.0, 2.0), 5).unwrap();
        let m = basis.evaluate(&[2.0], 2).unwrap();
        // d²/dt² of 1, t, t², t³, t⁴ at t = 2
        assert_eq!(m.row(0).as_slice(), &[0.0, 0.0, 2.0, 12.0, 48.0]);
    }

    #[test]
    fn derivative_beyond_degree_vanishes() {
        let basis = Monomial::new((0.0, 1.0), 3).unwrap();
        let m = basis.evaluate(&[0.3, 0.7], 3).unwrap();
        assert!(m.into_inner().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn zero_power_at_origin_is_one() {
        let basis = Monomial::new((0.0, 1.0), 2).unwrap();
        let m = basis.evaluate(&[0.0], 1).unwrap();
        assert_eq!(m.row(0).as_slice(), &[0.0, 1.0]);
    }

    #[test]
    fn closed_form_penalty_agrees_with_quadrature() {
        let basis = Monomial::new((-1.0, 2.0), 6).unwrap();
        for q in 0..3 {
            let exact = basis.penalty(q, 0).unwrap();
            let numeric = quadrature_penalty(&basis, q, 6).unwrap();
            assert_abs_diff_eq!(exact.max_abs_diff(&numeric), 0.0, epsilon = 1e-8);
        }
    }
}
