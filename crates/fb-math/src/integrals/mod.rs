//! Numerical integration.
//!
//! [`romb`] applies Romberg extrapolation to `2^k + 1` equally spaced
//! samples that the caller has already computed; [`RombergIntegral`] picks
//! the level and lays out where those samples go.

use fb_core::{
    errors::{Error, Result},
    Real, Size,
};

/// Largest Romberg level accepted; `2^30 + 1` samples is already far past
/// anything that fits a useful amount of memory.
pub const MAX_ROMBERG_LEVEL: u32 = 30;

/// Number of samples `2^level + 1` used by a Romberg rule of the given level.
pub fn romberg_samples(level: u32) -> Result<Size> {
    if level > MAX_ROMBERG_LEVEL {
        return Err(Error::InvalidArgument(format!(
            "Romberg level {level} exceeds the maximum of {MAX_ROMBERG_LEVEL}"
        )));
    }
    Ok((1usize << level) + 1)
}

/// Romberg integration of equally spaced samples.
///
/// `samples` must hold `2^k + 1` values spaced `dx` apart. Successive
/// trapezoid estimates at spacings `2^k dx, …, 2 dx, dx` are combined by
/// Richardson extrapolation, so a polynomial of degree `2k + 1` is
/// integrated exactly.
///
/// # Errors
/// Returns an error if `samples` is empty or its length is not `2^k + 1`.
pub fn romb(samples: &[Real], dx: Real) -> Result<Real> {
    let n_samples = samples.len();
    if n_samples == 0 {
        return Err(Error::InvalidArgument(
            "romb: at least one sample is required".into(),
        ));
    }
    let n_intervals = n_samples - 1;
    if n_intervals == 0 {
        return Ok(0.0);
    }
    if !n_intervals.is_power_of_two() {
        return Err(Error::InvalidArgument(format!(
            "romb: number of samples must be 2^k + 1, got {n_samples}"
        )));
    }
    let levels = n_intervals.trailing_zeros() as usize;

    let mut h = n_intervals as Real * dx;
    let mut previous = vec![0.5 * h * (samples[0] + samples[n_intervals])];
    let mut stride = n_intervals;

    for i in 1..=levels {
        // Refine the trapezoid with the midpoints of the previous panels.
        stride /= 2;
        h *= 0.5;
        let midpoints: Real = (stride..n_intervals)
            .step_by(2 * stride)
            .map(|idx| samples[idx])
            .sum();
        let mut row = Vec::with_capacity(i + 1);
        row.push(0.5 * previous[0] + h * midpoints);

        let mut factor = 1.0;
        for j in 1..=i {
            factor *= 4.0;
            let value = row[j - 1] + (row[j - 1] - previous[j - 1]) / (factor - 1.0);
            row.push(value);
        }
        previous = row;
    }
    Ok(previous[levels])
}

// ── Romberg ───────────────────────────────────────────────────────────────────

/// Fixed-level Romberg rule sampling `2^level + 1` equally spaced points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RombergIntegral {
    level: u32,
}

impl RombergIntegral {
    /// Create a new Romberg integrator.
    ///
    /// # Errors
    /// Returns an error if `level` exceeds [`MAX_ROMBERG_LEVEL`].
    pub fn new(level: u32) -> Result<Self> {
        romberg_samples(level)?;
        Ok(Self { level })
    }

    /// Number of function evaluations per integral, `2^k + 1`.
    pub fn samples(&self) -> Size {
        (1usize << self.level) + 1
    }

    /// Spacing of the nodes on `[a, b]`.
    pub fn step(&self, a: Real, b: Real) -> Real {
        (b - a) / (self.samples() - 1) as Real
    }

    /// The abscissae this rule samples on `[a, b]`.
    pub fn nodes(&self, a: Real, b: Real) -> Vec<Real> {
        let n = self.samples();
        let dx = self.step(a, b);
        let mut nodes: Vec<Real> = (0..n).map(|i| a + i as Real * dx).collect();
        nodes[n - 1] = b;
        nodes
    }
}
