//! Angle conversion and normalization.

use crate::types::{constants, Scalar};

/// Converts degrees to radians.
pub fn to_radians<T: Scalar>(degrees: T) -> T {
    degrees * constants::pi_over_straight_angle()
}

/// Converts radians to degrees.
pub fn to_degrees<T: Scalar>(radians: T) -> T {
    radians * constants::straight_angle_over_pi()
}

/// Wraps `angle` into `[0, period)`.
fn wrap<T: Scalar>(angle: T, period: T) -> T {
    let r = angle % period;
    if r >= T::zero() {
        return r;
    }
    // A tiny negative remainder can round up to exactly `period`.
    let shifted = r + period;
    if shifted < period {
        shifted
    } else {
        T::zero()
    }
}

/// Wraps an angle in radians into `[0, 2π)`.
pub fn normalize_radians<T: Scalar>(angle: T) -> T {
    wrap(angle, constants::two_pi())
}

/// Wraps an angle in degrees into `[0, 360)`.
pub fn normalize_degrees<T: Scalar>(angle: T) -> T {
    wrap(angle, <T as Scalar>::from_f64(360.0))
}
