//! Equality, zero and range tests under an explicit tolerance.
//!
//! Every comparison takes its epsilon from the caller. An epsilon of zero
//! reduces [`is_equal`] and [`is_zero`] to exact IEEE comparison.

use num_traits::Float;

/// True if `|a - b| <= epsilon`.
pub fn is_equal<T: Float>(a: T, b: T, epsilon: T) -> bool {
    (a - b).abs() <= epsilon
}

/// True if `|a| <= epsilon`.
pub fn is_zero<T: Float>(a: T, epsilon: T) -> bool {
    a.abs() <= epsilon
}

/// True if `v` lies between `a` and `b` inclusive, in either order.
pub fn contains<T: PartialOrd>(v: T, a: T, b: T) -> bool {
    if a <= b {
        v >= a && v <= b
    } else {
        v >= b && v <= a
    }
}
