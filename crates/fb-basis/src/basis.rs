//! The `Basis` trait shared by every family, and the quadrature used by
//! families without a closed-form penalty.

use std::ops::Range;

use fb_core::{errors::Result, Real, Size};
use fb_math::{romb, Matrix, RombergIntegral};
use num_traits::ToPrimitive;

use crate::domain::Domain;

/// Romberg level used by [`Basis::default_penalty`]: `2^12 + 1` samples.
pub const DEFAULT_ROMBERG_LEVEL: u32 = 12;

/// State common to every basis system: its domain and size `K`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasisCore {
    domain: Domain,
    n_basis: Size,
}

impl BasisCore {
    /// Validate the domain and coerce `n_basis` to a positive integer.
    pub fn new<K: ToPrimitive + Copy>(domain: (Real, Real), n_basis: K) -> Result<Self> {
        Ok(Self {
            domain: Domain::try_from(domain)?,
            n_basis: fb_core::to_positive_count(n_basis, "number of basis functions")?,
        })
    }

    /// The domain.
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Number of basis functions `K`.
    pub fn n_basis(&self) -> Size {
        self.n_basis
    }

    /// Replace the domain; nothing changes if `bounds` is invalid.
    pub fn set_domain(&mut self, bounds: &[Real]) -> Result<()> {
        self.domain = Domain::from_slice(bounds)?;
        Ok(())
    }
}

/// A univariate basis system `{B_k}`, `k = 0..K`.
///
/// Implementors provide the per-family derivative evaluation and penalty;
/// domain handling and input checks come from the provided methods.
pub trait Basis: std::fmt::Debug + Send + Sync {
    /// Shared domain/size state.
    fn core(&self) -> &BasisCore;

    /// Mutable access to the shared state.
    fn core_mut(&mut self) -> &mut BasisCore;

    /// Evaluate the `q`-th derivative of every basis function at `x`
    /// without checking domain membership.
    ///
    /// Row `r`, column `k` holds `B_k^(q)(x[r])`.
    fn evaluate_unchecked(&self, x: &[Real], q: Size) -> Matrix;

    /// The `K × K` penalty matrix `P[i, j] = ∫ B_i^(q)(t) B_j^(q)(t) dt`
    /// over the domain.
    ///
    /// `level` is the Romberg level (`2^level + 1` samples) for families
    /// that integrate numerically; closed-form families ignore it.
    fn penalty(&self, q: Size, level: u32) -> Result<Matrix>;

    /// The domain of the basis system.
    fn domain(&self) -> Domain {
        self.core().domain()
    }

    /// Replace the domain. `bounds` must hold exactly two values with
    /// `lower < upper`; on error the basis is left unchanged.
    fn set_domain(&mut self, bounds: &[Real]) -> Result<()> {
        self.core_mut().set_domain(bounds)
    }

    /// Number of basis functions `K`.
    fn n_basis(&self) -> Size {
        self.core().n_basis()
    }

    /// Evaluate the `q`-th derivative of every basis function at `x`.
    ///
    /// # Errors
    /// Returns [`fb_core::Error::OutOfDomain`] if any location lies outside
    /// the domain; nothing is evaluated in that case.
    fn evaluate(&self, x: &[Real], q: Size) -> Result<Matrix> {
        self.domain().check_contains(x)?;
        Ok(self.evaluate_unchecked(x, q))
    }

    /// [`penalty`](Basis::penalty) at [`DEFAULT_ROMBERG_LEVEL`].
    fn default_penalty(&self, q: Size) -> Result<Matrix> {
        self.penalty(q, DEFAULT_ROMBERG_LEVEL)
    }
}

/// Penalty matrix by Romberg quadrature over the whole domain.
///
/// The derivative matrix is sampled once on the `2^level + 1` Romberg
/// nodes and every column product is integrated with [`romb`].
pub fn quadrature_penalty<B: Basis + ?Sized>(basis: &B, q: Size, level: u32) -> Result<Matrix> {
    let rule = RombergIntegral::new(level)?;
    let domain = basis.domain();
    let nodes = rule.nodes(domain.lower(), domain.upper());
    let values = basis.evaluate_unchecked(&nodes, q);
    let dx = rule.step(domain.lower(), domain.upper());

    let k = basis.n_basis();
    let mut gram = Matrix::zeros(k, k);
    accumulate_gram(&mut gram, &values, dx, 0..k)?;
    Ok(gram)
}

/// `base^q` for a derivative order `q`.
///
/// Orders that do not fit an `i32` go through `powf`, with the sign taken
/// from the parity of `q`.
pub(crate) fn powu(base: Real, q: Size) -> Real {
    match i32::try_from(q) {
        Ok(n) => base.powi(n),
        Err(_) => {
            let magnitude = base.abs().powf(q as Real);
            if base < 0.0 && q % 2 == 1 {
                -magnitude
            } else {
                magnitude
            }
        }
    }
}

/// Add `∫ v_i v_j` for every pair of `columns` of `values` into `gram`.
///
/// `values` holds equally spaced samples (`dx` apart, `2^k + 1` rows).
/// Both triangles are written from the same integral, so `gram` stays
/// exactly symmetric.
pub(crate) fn accumulate_gram(
    gram: &mut Matrix,
    values: &Matrix,
    dx: Real,
    columns: Range<Size>,
) -> Result<()> {
    let mut products = vec![0.0; values.rows()];
    for i in columns.clone() {
        let vi = values.column_slice(i);
        for j in i..columns.end {
            let vj = values.column_slice(j);
            for (p, (a, b)) in products.iter_mut().zip(vi.iter().zip(vj)) {
                *p = a * b;
            }
            let integral = romb(&products, dx)?;
            gram[(i, j)] += integral;
            if i != j {
                gram[(j, i)] += integral;
            }
        }
    }
    Ok(())
}
