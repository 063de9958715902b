//! Coercion of numeric-like inputs into counts.
//!
//! Basis sizes and spline orders may be supplied as any primitive number.
//! Integers are taken as they are; floats are truncated toward zero, the
//! way an integer conversion does. Values that cannot be represented as a
//! `usize` (NaN, infinities, negative numbers) are rejected.

use num_traits::ToPrimitive;

use crate::errors::{Error, Result};
use crate::Size;

/// Convert `value` into a `Size`, naming the quantity `name` in errors.
pub fn to_count<T: ToPrimitive + Copy>(value: T, name: &str) -> Result<Size> {
    value.to_usize().ok_or_else(|| {
        Error::InvalidArgument(format!(
            "{name} must be convertible to a non-negative integer"
        ))
    })
}

/// Convert `value` into a strictly positive `Size`.
///
/// # Example
/// ```
/// use fb_core::count::to_positive_count;
/// assert_eq!(to_positive_count(8_i32, "K").unwrap(), 8);
/// assert_eq!(to_positive_count(8.9_f64, "K").unwrap(), 8);
/// assert!(to_positive_count(f64::NAN, "K").is_err());
/// assert!(to_positive_count(0_u8, "K").is_err());
/// ```
pub fn to_positive_count<T: ToPrimitive + Copy>(value: T, name: &str) -> Result<Size> {
    let n = to_count(value, name)?;
    crate::ensure!(n > 0, "{name} must be a positive integer, got {n}");
    Ok(n)
}
