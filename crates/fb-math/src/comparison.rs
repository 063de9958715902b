//! Floating-point comparison utilities.

use fb_core::Real;

/// Return `true` if `|a - b| <= epsilon`.
#[inline]
pub fn close(a: Real, b: Real, epsilon: Real) -> bool {
    (a - b).abs() <= epsilon
}

/// Return `true` if `a` and `b` agree to within `rtol` relative to the
/// larger of the two magnitudes.
#[inline]
pub fn close_relative(a: Real, b: Real, rtol: Real) -> bool {
    (a - b).abs() <= rtol * a.abs().max(b.abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_basic() {
        assert!(close(1.0, 1.0 + 1e-11, 1e-10));
        assert!(!close(1.0, 1.0 + 1e-9, 1e-10));
    }

    #[test]
    fn close_relative_scales() {
        assert!(close_relative(1e6, 1e6 + 1e-4, 1e-9));
        assert!(!close_relative(1.0, 1.0 + 1e-4, 1e-9));
        assert!(close_relative(0.0, 0.0, 1e-9));
    }
}
