//! Polynomial evaluation and shared solver helpers.

use scalarmath_core::Scalar;

/// Evaluates a polynomial at `x` using Horner's scheme.
///
/// Coefficients are ordered highest-degree-first, matching the solvers:
/// `evaluate(&[a, b, c], x) == a*x² + b*x + c`. An empty slice evaluates
/// to zero.
///
/// # Example
/// ```
/// use scalarmath_roots::evaluate;
///
/// assert_eq!(evaluate(&[1.0, 6.0, -16.0], 2.0), 0.0);
/// ```
pub fn evaluate<T: Scalar>(coefficients: &[T], x: T) -> T {
    coefficients
        .iter()
        .fold(T::zero(), |acc, &coefficient| acc * x + coefficient)
}

/// Clamps a caller tolerance to be non-negative; NaN counts as zero.
pub(crate) fn non_negative<T: Scalar>(epsilon: T) -> T {
    if epsilon > T::zero() {
        epsilon
    } else {
        T::zero()
    }
}
