//! Exponential basis `B_k(t) = exp(θ_k t)`.

use fb_core::{errors::Result, Real, Size};
use fb_math::{Array, Matrix};
use num_traits::ToPrimitive;

use crate::basis::{powu, Basis, BasisCore};

/// The exponential basis system with strictly increasing rates `θ`.
#[derive(Debug, Clone, PartialEq)]
pub struct Exponential {
    core: BasisCore,
    theta: Array,
}

impl Exponential {
    /// Create an exponential basis with the default rates `θ = [0, 1, …, K-1]`.
    ///
    /// # Example
    /// ```
    /// use fb_basis::Exponential;
    /// let basis = Exponential::new((0.0, 1.0), 6).unwrap();
    /// assert_eq!(basis.theta().as_slice(), &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    /// ```
    pub fn new<K: ToPrimitive + Copy>(domain: (Real, Real), n_basis: K) -> Result<Self> {
        let core = BasisCore::new(domain, n_basis)?;
        let theta: Vec<Real> = (0..core.n_basis()).map(|k| k as Real).collect();
        Self::from_parts(core, &theta)
    }

    /// Create an exponential basis with explicit rates.
    ///
    /// # Errors
    /// Returns an error unless `theta` has exactly `n_basis` finite,
    /// strictly increasing entries.
    pub fn with_theta<K: ToPrimitive + Copy>(
        domain: (Real, Real),
        n_basis: K,
        theta: &[Real],
    ) -> Result<Self> {
        Self::from_parts(BasisCore::new(domain, n_basis)?, theta)
    }

    fn from_parts(core: BasisCore, theta: &[Real]) -> Result<Self> {
        let theta = Array::from_slice(theta);
        fb_core::ensure!(
            theta.size() == core.n_basis(),
            "theta must hold one rate per basis function: expected {}, got {}",
            core.n_basis(),
            theta.size()
        );
        fb_core::ensure!(
            theta.iter().all(|t| t.is_finite()),
            "theta must be finite, got {theta}"
        );
        fb_core::ensure!(
            theta.is_strictly_increasing(),
            "theta must be strictly increasing, got {theta}"
        );
        log::debug!("exponential basis: theta={theta} on {}", core.domain());
        Ok(Self { core, theta })
    }

    /// The rates `θ`.
    pub fn theta(&self) -> &Array {
        &self.theta
    }
}

impl Basis for Exponential {
    fn core(&self) -> &BasisCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut BasisCore {
        &mut self.core
    }

    fn evaluate_unchecked(&self, x: &[Real], q: Size) -> Matrix {
        let theta = self.theta.as_slice();
        let scale: Vec<Real> = theta.iter().map(|&t| powu(t, q)).collect();
        Matrix::from_fn(x.len(), self.n_basis(), |r, k| {
            scale[k] * (theta[k] * x[r]).exp()
        })
    }

    fn penalty(&self, q: Size, _level: u32) -> Result<Matrix> {
        let theta = self.theta.as_slice();
        let domain = self.domain();
        let (lower, length) = (domain.lower(), domain.length());
        let k = self.n_basis();
        let mut gram = Matrix::zeros(k, k);
        for i in 0..k {
            for j in i..k {
                let s = theta[i] + theta[j];
                // ∫ exp(s t) dt over the domain
                let integral = if s == 0.0 {
                    length
                } else {
                    (s * lower).exp() * (s * length).exp_m1() / s
                };
                let value = powu(theta[i] * theta[j], q) * integral;
                gram[(i, j)] = value;
                gram[(j, i)] = value;
            }
        }
        Ok(gram)
    }
}
