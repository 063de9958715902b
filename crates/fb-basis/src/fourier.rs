//! Fourier basis: a constant followed by `sin`/`cos` pairs.
//!
//! Column 0 is `1`; columns `2m-1` and `2m` are `sin(mωt)` and `cos(mωt)`
//! with `ω = 2π / period`, for harmonics `m = 1..=(K-1)/2`.

use std::f64::consts::PI;

use fb_core::{errors::Result, Real, Size};
use fb_math::{close_relative, Matrix};
use num_traits::ToPrimitive;

use crate::basis::{powu, quadrature_penalty, Basis, BasisCore};

/// Relative tolerance under which the period counts as the domain length.
const FULL_PERIOD_RTOL: Real = 1e-10;

/// The Fourier basis system. `K` is odd.
#[derive(Debug, Clone, PartialEq)]
pub struct Fourier {
    core: BasisCore,
    period: Real,
}

impl Fourier {
    /// Create a Fourier basis whose period is the length of `domain`.
    pub fn new<K: ToPrimitive + Copy>(domain: (Real, Real), n_basis: K) -> Result<Self> {
        let core = BasisCore::new(domain, n_basis)?;
        let period = core.domain().length();
        Self::from_parts(core, period)
    }

    /// Create a Fourier basis with an explicit period.
    ///
    /// # Errors
    /// Returns an error if `n_basis` is even or `period` is not a positive
    /// finite number.
    ///
    /// # Example
    /// ```
    /// use fb_basis::Fourier;
    /// assert_eq!(Fourier::with_period((0.0, 1.0), 5, 1.0).unwrap().period(), 1.0);
    /// assert!(Fourier::with_period((0.0, 1.0), 6, 1.0).is_err());
    /// assert!(Fourier::with_period((0.0, 1.0), 5, -1.0).is_err());
    /// ```
    pub fn with_period<K: ToPrimitive + Copy>(
        domain: (Real, Real),
        n_basis: K,
        period: Real,
    ) -> Result<Self> {
        Self::from_parts(BasisCore::new(domain, n_basis)?, period)
    }

    fn from_parts(core: BasisCore, period: Real) -> Result<Self> {
        fb_core::ensure!(
            core.n_basis() % 2 == 1,
            "Fourier basis needs an odd number of functions, got {}",
            core.n_basis()
        );
        fb_core::ensure!(
            period.is_finite() && period > 0.0,
            "period must be positive, got {period}"
        );
        log::debug!(
            "fourier basis: K={} period={period} on {}",
            core.n_basis(),
            core.domain()
        );
        Ok(Self { core, period })
    }

    /// The period.
    pub fn period(&self) -> Real {
        self.period
    }

    /// Base angular frequency `ω = 2π / period`.
    pub fn omega(&self) -> Real {
        2.0 * PI / self.period
    }

    /// Number of `sin`/`cos` pairs, `(K-1)/2`.
    pub fn n_harmonics(&self) -> Size {
        (self.n_basis() - 1) / 2
    }

    /// Return `true` if the period equals the domain length, which makes
    /// the basis orthogonal over the domain.
    pub fn spans_full_period(&self) -> bool {
        close_relative(self.period, self.domain().length(), FULL_PERIOD_RTOL)
    }

    fn analytic_penalty(&self, q: Size) -> Matrix {
        let k = self.n_basis();
        let length = self.domain().length();
        let mut gram = Matrix::zeros(k, k);
        if q == 0 {
            gram[(0, 0)] = length;
        }
        for m in 1..=self.n_harmonics() {
            let w = m as Real * self.omega();
            let value = powu(w * w, q) * length / 2.0;
            gram[(2 * m - 1, 2 * m - 1)] = value;
            gram[(2 * m, 2 * m)] = value;
        }
        gram
    }
}

/// `d^q/dt^q` of `sin(wt)` (`sine == true`) or `cos(wt)`.
///
/// Each derivative advances the phase by a quarter turn:
/// `sin → cos → -sin → -cos`.
fn trig_derivative(sine: bool, w: Real, t: Real, q: Size) -> Real {
    let amplitude = powu(w, q);
    let shift = if sine { q % 4 } else { (q + 1) % 4 };
    let wt = w * t;
    let value = match shift {
        0 => wt.sin(),
        1 => wt.cos(),
        2 => -wt.sin(),
        _ => -wt.cos(),
    };
    amplitude * value
}

impl Basis for Fourier {
    fn core(&self) -> &BasisCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut BasisCore {
        &mut self.core
    }

    fn evaluate_unchecked(&self, x: &[Real], q: Size) -> Matrix {
        let omega = self.omega();
        Matrix::from_fn(x.len(), self.n_basis(), |r, c| {
            if c == 0 {
                return if q == 0 { 1.0 } else { 0.0 };
            }
            let m = (c + 1) / 2;
            trig_derivative(c % 2 == 1, m as Real * omega, x[r], q)
        })
    }

    fn penalty(&self, q: Size, level: u32) -> Result<Matrix> {
        if self.spans_full_period() {
            return Ok(self.analytic_penalty(q));
        }
        log::debug!(
            "fourier penalty: period {} differs from domain length {}, integrating at level {level}",
            self.period,
            self.domain().length()
        );
        quadrature_penalty(self, q, level)
    }
}
