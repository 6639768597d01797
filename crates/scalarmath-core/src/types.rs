//! Scalar precision trait and numerical constants.
//!
//! Every function in this workspace is generic over [`Scalar`], which is
//! implemented for `f32` and `f64`. The per-precision tolerances defined
//! here are conventions for callers; no function picks one up implicitly.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num_traits::{Float, FloatConst};
use std::fmt::{Debug, Display};

/// Trait for the floating-point types the library operates on (f32 or f64).
///
/// This trait combines the numeric traits needed by the scalar utilities
/// and the polynomial solvers, so that both precisions share one code path.
pub trait Scalar:
    Float
    + FloatConst
    + AbsDiffEq<Epsilon = Self>
    + RelativeEq
    + UlpsEq
    + Display
    + Debug
    + Default
    + Copy
    + Send
    + Sync
    + 'static
{
    /// Conventional tolerance below which a value is considered zero.
    const ALMOST_ZERO: Self;

    /// Conventional tolerance for [`correct`](crate::scalar::correct).
    const CORRECT_EPSILON: Self;

    /// Conventional tolerance for colinearity tests in geometry code.
    const COLINEAR_EPSILON: Self;

    /// Conventional tolerance for comparing angles in radians.
    const ANGLE_EPSILON: Self;

    /// Convert from f64 (for literals and constants).
    fn from_f64(v: f64) -> Self;

    /// Convert to f64 (for display and diagnostics).
    fn to_f64(self) -> f64;

    /// The smallest representable value strictly greater than `self`.
    fn next_up(self) -> Self;
}

impl Scalar for f32 {
    const ALMOST_ZERO: Self = 1e-3;
    const CORRECT_EPSILON: Self = 1e-3;
    const COLINEAR_EPSILON: Self = 1e-3;
    const ANGLE_EPSILON: Self = 1e-5;

    #[allow(clippy::cast_possible_truncation)]
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn next_up(self) -> Self {
        f32::next_up(self)
    }
}

impl Scalar for f64 {
    const ALMOST_ZERO: Self = 1e-3;
    const CORRECT_EPSILON: Self = 1e-3;
    const COLINEAR_EPSILON: Self = 1e-5;
    const ANGLE_EPSILON: Self = 1e-8;

    fn from_f64(v: f64) -> Self {
        v
    }

    fn to_f64(self) -> f64 {
        self
    }

    fn next_up(self) -> Self {
        f64::next_up(self)
    }
}

/// Numerical constants for different precision levels.
pub mod constants {
    use super::Scalar;

    /// Pi.
    pub fn pi<T: Scalar>() -> T {
        T::PI()
    }

    /// Two times pi, a full turn in radians.
    pub fn two_pi<T: Scalar>() -> T {
        T::PI() + T::PI()
    }

    /// Pi over two, a quarter turn in radians.
    pub fn pi_over_two<T: Scalar>() -> T {
        T::FRAC_PI_2()
    }

    /// Three pi over two, three quarter turns in radians.
    pub fn three_pi_over_two<T: Scalar>() -> T {
        <T as Scalar>::from_f64(1.5) * T::PI()
    }

    /// Pi over 180, the degree-to-radian factor.
    pub fn pi_over_straight_angle<T: Scalar>() -> T {
        T::PI() / <T as Scalar>::from_f64(180.0)
    }

    /// 180 over pi, the radian-to-degree factor.
    pub fn straight_angle_over_pi<T: Scalar>() -> T {
        <T as Scalar>::from_f64(180.0) / T::PI()
    }

    /// Conventional "almost zero" tolerance.
    pub fn almost_zero<T: Scalar>() -> T {
        T::ALMOST_ZERO
    }

    /// Conventional tolerance for value correction.
    pub fn correct_epsilon<T: Scalar>() -> T {
        T::CORRECT_EPSILON
    }

    /// Conventional colinearity tolerance.
    pub fn colinear_epsilon<T: Scalar>() -> T {
        T::COLINEAR_EPSILON
    }

    /// Conventional angle tolerance.
    pub fn angle_epsilon<T: Scalar>() -> T {
        T::ANGLE_EPSILON
    }
}
