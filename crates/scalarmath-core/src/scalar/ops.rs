//! Ordering, sign and interpolation primitives.
//!
//! The ordering helpers only need `PartialOrd`, so they work for integers
//! as well as floats. Comparisons involving NaN are false, which means
//! `min(NaN, x)` yields `x` and `min(x, NaN)` yields `NaN`.

use num_traits::{Float, One, Signed, Zero};
use std::ops::{Neg, Sub};

/// Returns true if `x` is NaN.
pub fn is_nan<T: Float>(x: T) -> bool {
    x.is_nan()
}

/// Returns true if `x` is positive or negative infinity.
pub fn is_inf<T: Float>(x: T) -> bool {
    x.is_infinite()
}

/// The quiet NaN of the given precision.
pub fn nan<T: Float>() -> T {
    T::nan()
}

/// The smaller of two values.
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

/// The larger of two values.
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

/// The operand with the smaller magnitude, keeping its sign.
pub fn abs_min<T: Signed + PartialOrd + Copy>(a: T, b: T) -> T {
    if a.abs() < b.abs() {
        a
    } else {
        b
    }
}

/// The operand with the larger magnitude, keeping its sign.
pub fn abs_max<T: Signed + PartialOrd + Copy>(a: T, b: T) -> T {
    if a.abs() > b.abs() {
        a
    } else {
        b
    }
}

/// `|a - b|`, computed without overflow for integers whose difference fits.
pub fn abs_difference<T>(a: T, b: T) -> T
where
    T: PartialOrd + Sub<Output = T>,
{
    if a < b {
        b - a
    } else {
        a - b
    }
}

/// Restricts `v` to `[lo, hi]`. Requires `lo <= hi`.
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    max(min(v, hi), lo)
}

/// Returns -1, 0 or +1 according to the sign of `v`.
///
/// Unlike `f64::signum`, zero (of either sign) maps to zero.
pub fn sign<T>(v: T) -> T
where
    T: Zero + One + Neg<Output = T> + PartialOrd,
{
    if v < T::zero() {
        -T::one()
    } else if v > T::zero() {
        T::one()
    } else {
        T::zero()
    }
}

/// Returns 0 if `x < edge`, otherwise 1.
pub fn step<T>(edge: T, x: T) -> T
where
    T: Zero + One + PartialOrd,
{
    if x < edge {
        T::zero()
    } else {
        T::one()
    }
}

/// Hermite interpolation between 0 and 1 as `x` moves from `lo` to `hi`.
pub fn smoothstep<T: Float>(lo: T, hi: T, x: T) -> T {
    let t = clamp((x - lo) / (hi - lo), T::zero(), T::one());
    let two = T::one() + T::one();
    let three = two + T::one();
    t * t * (three - two * t)
}

/// Linear interpolation `a + (b - a) * t`, not clamped.
pub fn mix<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Floating-point remainder with the sign of the dividend, like C's `fmod`.
pub fn modulo<T: Float>(x: T, y: T) -> T {
    x % y
}
