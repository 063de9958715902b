//! B-spline basis over an explicit knot vector.
//!
//! A basis of `K` functions of order `m` (degree `m - 1`) needs `K + m`
//! non-decreasing knots. Function `i` is supported on `[t_i, t_{i+m}]`
//! and vanishes exactly outside it.
//!
//! Values come from the Cox–de Boor recursion started from the degree-0
//! indicator of the knot span containing the sample; derivatives difference
//! adjacent lower-order functions:
//!
//! ```text
//! B'_{i,m}(t) = (m-1) [ B_{i,m-1}(t) / (t_{i+m-1} - t_i) - B_{i+1,m-1}(t) / (t_{i+m} - t_{i+1}) ]
//! ```

use fb_core::{errors::Result, Real, Size};
use fb_math::{Array, Matrix, RombergIntegral};
use num_traits::ToPrimitive;

use crate::basis::{accumulate_gram, Basis, BasisCore};
use crate::domain::Domain;

/// Default knot vector for `n_basis` functions of the given `order`.
///
/// `n_basis - order + 2` evenly spaced breakpoints span the domain and each
/// boundary is repeated until it appears `order` times.
///
/// # Errors
/// Returns an error if `order` is zero or exceeds `n_basis`.
///
/// # Example
/// ```
/// use fb_basis::{default_knots, Domain};
/// let knots = default_knots(3, 8, Domain::new(-1.0, 1.0).unwrap()).unwrap();
/// assert_eq!(knots.size(), 11);
/// assert_eq!(knots[2], -1.0);
/// assert_eq!(knots[5], 0.0);
/// ```
pub fn default_knots(order: Size, n_basis: Size, domain: Domain) -> Result<Array> {
    fb_core::ensure!(order >= 1, "spline order must be at least 1");
    fb_core::ensure!(
        n_basis >= order,
        "need at least as many basis functions as the order: K={n_basis}, order={order}"
    );
    let breakpoints = domain.linspace(n_basis - order + 2);
    let pad = order - 1;
    let mut knots = Vec::with_capacity(n_basis + order);
    knots.extend(std::iter::repeat(domain.lower()).take(pad));
    knots.extend(breakpoints.iter().copied());
    knots.extend(std::iter::repeat(domain.upper()).take(pad));
    Ok(Array::from_vec(knots))
}

/// The B-spline basis system.
#[derive(Debug, Clone, PartialEq)]
pub struct Bspline {
    core: BasisCore,
    order: Size,
    knots: Array,
}

impl Bspline {
    /// Create a B-spline basis with [`default_knots`].
    ///
    /// `order` is coerced like `n_basis`; anything that is not convertible
    /// to a positive integer fails.
    pub fn new<K, O>(domain: (Real, Real), n_basis: K, order: O) -> Result<Self>
    where
        K: ToPrimitive + Copy,
        O: ToPrimitive + Copy,
    {
        let core = BasisCore::new(domain, n_basis)?;
        let order = fb_core::to_positive_count(order, "spline order")?;
        let knots = default_knots(order, core.n_basis(), core.domain())?;
        log::debug!(
            "bspline basis: K={} order={order} knots={knots}",
            core.n_basis()
        );
        Ok(Self { core, order, knots })
    }

    /// Create a B-spline basis over explicit `knots`.
    ///
    /// # Errors
    /// Returns an error if `knots` does not hold `n_basis + order` finite,
    /// non-decreasing values.
    pub fn with_knots<K, O>(
        domain: (Real, Real),
        n_basis: K,
        order: O,
        knots: &[Real],
    ) -> Result<Self>
    where
        K: ToPrimitive + Copy,
        O: ToPrimitive + Copy,
    {
        let core = BasisCore::new(domain, n_basis)?;
        let order = fb_core::to_positive_count(order, "spline order")?;
        let knots = validate_knots(knots, core.n_basis() + order)?;
        Ok(Self { core, order, knots })
    }

    /// Spline order (degree + 1).
    pub fn order(&self) -> Size {
        self.order
    }

    /// The knot vector.
    pub fn knots(&self) -> &Array {
        &self.knots
    }

    /// Replace the knot vector; the basis is unchanged on error.
    pub fn set_knots(&mut self, knots: &[Real]) -> Result<()> {
        self.knots = validate_knots(knots, self.n_basis() + self.order)?;
        Ok(())
    }

    /// Index `j` of the non-empty knot span `[t_j, t_{j+1})` holding `x`.
    ///
    /// The last non-empty span also claims its right end point so the
    /// upper boundary is covered. `None` outside the knot range.
    fn find_span(&self, x: Real) -> Option<Size> {
        let t = self.knots.as_slice();
        let mut last_span = None;
        for j in 0..t.len().saturating_sub(1) {
            if t[j] < t[j + 1] {
                if t[j] <= x && x < t[j + 1] {
                    return Some(j);
                }
                last_span = Some(j);
            }
        }
        last_span.filter(|&j| x == t[j + 1])
    }

    /// Basis functions of order `self.order` with a nonzero value in span `j`.
    fn active_columns(&self, span: Size) -> std::ops::Range<Size> {
        let first = (span + 1).saturating_sub(self.order);
        first..(span + 1).min(self.n_basis())
    }
}

fn validate_knots(knots: &[Real], expected: Size) -> Result<Array> {
    fb_core::ensure!(
        knots.len() == expected,
        "knot vector must have length K + order = {expected}, got {}",
        knots.len()
    );
    let knots = Array::from_slice(knots);
    fb_core::ensure!(
        knots.iter().all(|t| t.is_finite()),
        "knots must be finite, got {knots}"
    );
    fb_core::ensure!(
        knots.is_non_decreasing(),
        "knots must be non-decreasing, got {knots}"
    );
    Ok(knots)
}

/// `num / den`, with empty spans (`den == 0`) contributing nothing.
#[inline]
fn ratio(num: Real, den: Real) -> Real {
    if den > 0.0 {
        num / den
    } else {
        0.0
    }
}

/// All `knots.len() - order` B-splines of `order` at `x`, with the
/// recursion started from the indicator of knot span `span`.
fn spline_values(knots: &[Real], span: Size, x: Real, order: Size) -> Vec<Real> {
    let mut values = vec![0.0; knots.len() - 1];
    values[span] = 1.0;
    for m in 2..=order {
        let n = knots.len() - m;
        let next: Vec<Real> = (0..n)
            .map(|i| {
                let left = ratio(x - knots[i], knots[i + m - 1] - knots[i]) * values[i];
                let right = ratio(knots[i + m] - x, knots[i + m] - knots[i + 1]) * values[i + 1];
                left + right
            })
            .collect();
        values = next;
    }
    values
}

/// `q`-th derivatives of all B-splines of `order` at `x` in span `span`.
fn spline_derivatives(knots: &[Real], span: Size, x: Real, order: Size, q: Size) -> Vec<Real> {
    if q == 0 {
        return spline_values(knots, span, x, order);
    }
    let n = knots.len() - order;
    if q >= order {
        return vec![0.0; n];
    }
    let lower = spline_derivatives(knots, span, x, order - 1, q - 1);
    let scale = (order - 1) as Real;
    (0..n)
        .map(|i| {
            scale
                * (ratio(lower[i], knots[i + order - 1] - knots[i])
                    - ratio(lower[i + 1], knots[i + order] - knots[i + 1]))
        })
        .collect()
}

impl Basis for Bspline {
    fn core(&self) -> &BasisCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut BasisCore {
        &mut self.core
    }

    fn evaluate_unchecked(&self, x: &[Real], q: Size) -> Matrix {
        let knots = self.knots.as_slice();
        let mut out = Matrix::zeros(x.len(), self.n_basis());
        for (r, &xr) in x.iter().enumerate() {
            let Some(span) = self.find_span(xr) else {
                continue;
            };
            let row = spline_derivatives(knots, span, xr, self.order, q);
            for k in self.active_columns(span) {
                out[(r, k)] = row[k];
            }
        }
        out
    }

    /// Integrates span by span so that derivatives which jump at the knots
    /// are integrated one polynomial piece at a time.
    fn penalty(&self, q: Size, level: u32) -> Result<Matrix> {
        let rule = RombergIntegral::new(level)?;
        let domain = self.domain();
        let knots = self.knots.as_slice();
        let k = self.n_basis();
        let mut gram = Matrix::zeros(k, k);

        for span in 0..knots.len() - 1 {
            let a = knots[span].max(domain.lower());
            let b = knots[span + 1].min(domain.upper());
            if a >= b {
                continue;
            }
            let columns = self.active_columns(span);
            if columns.is_empty() {
                continue;
            }
            log::trace!("bspline penalty: span {span} on [{a}, {b}], columns {columns:?}");

            let nodes = rule.nodes(a, b);
            let mut values = Matrix::zeros(nodes.len(), k);
            for (r, &x) in nodes.iter().enumerate() {
                let row = spline_derivatives(knots, span, x, self.order, q);
                for c in columns.clone() {
                    values[(r, c)] = row[c];
                }
            }
            let dx = rule.step(a, b);
            accumulate_gram(&mut gram, &values, dx, columns)?;
        }
        Ok(gram)
    }
}
