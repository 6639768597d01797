//! Rounding, grid snapping and noise correction.
//!
//! `round_up` and `round_down` are directional with respect to zero, not
//! to the number line: `round_up(-1.1) == -2.0` and `round_down(-1.1) == -1.0`.
//! The snap functions apply the same rounding modes to `x / size` and scale
//! the result back by `size`.

use crate::error::{Result, ScalarError};
use crate::tolerance::is_equal;
use crate::types::Scalar;
use num_traits::Float;

/// Largest integer not greater than `x`.
pub fn floor<T: Float>(x: T) -> T {
    x.floor()
}

/// Smallest integer not less than `x`.
pub fn ceil<T: Float>(x: T) -> T {
    x.ceil()
}

/// Integer part of `x`, rounding toward zero.
pub fn trunc<T: Float>(x: T) -> T {
    x.trunc()
}

/// Nearest integer, rounding half-way cases away from zero.
pub fn round<T: Float>(x: T) -> T {
    x.round()
}

/// Rounds away from zero to the next integer; integers are unchanged.
pub fn round_up<T: Float>(x: T) -> T {
    if x < T::zero() {
        x.floor()
    } else {
        x.ceil()
    }
}

/// Rounds toward zero; same as [`trunc`].
pub fn round_down<T: Float>(x: T) -> T {
    x.trunc()
}

/// Fractional part `x - trunc(x)`, carrying the sign of `x`.
pub fn fract<T: Float>(x: T) -> T {
    x - x.trunc()
}

/// Snaps `x` to the nearest multiple of `size`, half-way cases away from zero.
///
/// `size` must be positive. A zero or non-finite size is not trapped and
/// yields whatever IEEE arithmetic produces (NaN or infinity); use
/// [`checked_snap`] to reject it instead.
pub fn snap<T: Float>(x: T, size: T) -> T {
    size * round(x / size)
}

/// Snaps `x` away from zero to a multiple of `size`.
pub fn snap_up<T: Float>(x: T, size: T) -> T {
    size * round_up(x / size)
}

/// Snaps `x` toward zero to a multiple of `size`.
pub fn snap_down<T: Float>(x: T, size: T) -> T {
    size * round_down(x / size)
}

fn validate_grid_size<T: Scalar>(size: T) -> Result<()> {
    if size > T::zero() && size.is_finite() {
        Ok(())
    } else {
        Err(ScalarError::invalid_grid_size(Scalar::to_f64(size)))
    }
}

/// Like [`snap`], but rejects a grid size that is not positive and finite.
pub fn checked_snap<T: Scalar>(x: T, size: T) -> Result<T> {
    validate_grid_size(size)?;
    Ok(snap(x, size))
}

/// Like [`snap_up`], but rejects a grid size that is not positive and finite.
pub fn checked_snap_up<T: Scalar>(x: T, size: T) -> Result<T> {
    validate_grid_size(size)?;
    Ok(snap_up(x, size))
}

/// Like [`snap_down`], but rejects a grid size that is not positive and finite.
pub fn checked_snap_down<T: Scalar>(x: T, size: T) -> Result<T> {
    validate_grid_size(size)?;
    Ok(snap_down(x, size))
}

/// Rounds `x` to `decimals` decimal places if the result is within
/// `epsilon` of `x`, otherwise returns `x` unchanged.
///
/// This removes accumulated noise near "nice" values such as `0.9999999`
/// without disturbing values that are genuinely different.
///
/// # Example
/// ```
/// use scalarmath_core::scalar::correct;
///
/// assert_eq!(correct(0.99999999_f64, 0, 1e-6), 1.0);
/// assert_eq!(correct(1.4_f64, 0, 0.3), 1.4);
/// ```
pub fn correct<T: Scalar>(x: T, decimals: u32, epsilon: T) -> T {
    let factor = <T as Scalar>::from_f64(10.0).powi(i32::try_from(decimals).unwrap_or(i32::MAX));
    let rounded = round(x * factor) / factor;
    if is_equal(x, rounded, epsilon) {
        rounded
    } else {
        x
    }
}
