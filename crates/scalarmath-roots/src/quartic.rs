//! Quartic solver using Ferrari's method.
//!
//! The quartic is normalized and depressed with `x = y - b/(4a)` to
//! `y⁴ + p·y² + q·y + r = 0`. A real root `z` of the resolvent cubic
//!
//! ```text
//! z³ - (p/2)·z² - r·z + (r·p/2 - q²/8) = 0
//! ```
//!
//! splits the depressed quartic into two real quadratics, each of which is
//! handed to [`solve_quadratic`].

use crate::cubic::solve_cubic;
use crate::polynomial::non_negative;
use crate::quadratic::solve_quadratic;
use crate::root_set::QuarticRoots;
use scalarmath_core::tolerance::is_zero;
use scalarmath_core::Scalar;

/// Solves `a*x⁴ + b*x³ + c*x² + d*x + e = 0` for its real roots.
///
/// The roots of the first quadratic factor come first, followed by the
/// roots of the second, each in [`solve_quadratic`] order. A root shared by
/// both factors is reported twice, so `(x + 1)⁴` yields `[-1, -1]`.
///
/// When the depressed constant term `r` is within `epsilon` of zero, the
/// depressed quartic is `y·(y³ + p·y + q)` and the roots are those of the
/// cubic factor followed by `y = 0`.
///
/// If `a` is within `epsilon` of zero the equation is solved as the cubic
/// `b*x³ + c*x² + d*x + e = 0` instead.
pub fn solve_quartic<T: Scalar>(a: T, b: T, c: T, d: T, e: T, epsilon: T) -> QuarticRoots<T> {
    let epsilon = non_negative(epsilon);
    if is_zero(a, epsilon) {
        return solve_cubic(b, c, d, e, epsilon).widen();
    }

    let half = <T as Scalar>::from_f64(0.5);
    let two = <T as Scalar>::from_f64(2.0);
    let four = <T as Scalar>::from_f64(4.0);
    let eight = <T as Scalar>::from_f64(8.0);
    let sixteen = <T as Scalar>::from_f64(16.0);
    let three_eighths = <T as Scalar>::from_f64(3.0 / 8.0);
    let three_256ths = <T as Scalar>::from_f64(3.0 / 256.0);

    // Normal form x⁴ + A·x³ + B·x² + C·x + D
    let a_n = b / a;
    let b_n = c / a;
    let c_n = d / a;
    let d_n = e / a;

    // Depressed form y⁴ + p·y² + q·y + r
    let sq_a = a_n * a_n;
    let p = b_n - three_eighths * sq_a;
    let q = sq_a * a_n / eight - half * a_n * b_n + c_n;
    let r = -three_256ths * sq_a * sq_a + sq_a * b_n / sixteen - a_n * c_n / four + d_n;

    let mut roots = QuarticRoots::none();
    if is_zero(r, epsilon) {
        roots.extend_from(&solve_cubic(T::one(), T::zero(), p, q, epsilon));
        roots.push(T::zero());
    } else {
        // First real root of the resolvent
        let resolvent = solve_cubic(T::one(), -half * p, -r, half * r * p - q * q / eight, epsilon);
        let Some(z) = resolvent.first() else {
            return roots;
        };

        let (Some(u), Some(v)) = (
            tolerant_sqrt(z * z - r, epsilon),
            tolerant_sqrt(two * z - p, epsilon),
        ) else {
            return roots;
        };

        let v_first = if q < T::zero() { -v } else { v };
        roots.extend_from(&solve_quadratic(T::one(), v_first, z - u, epsilon));
        roots.extend_from(&solve_quadratic(T::one(), -v_first, z + u, epsilon));
    }

    let shift = a_n / four;
    roots.map(|y| y - shift)
}

/// Square root that snaps values within `epsilon` of zero to zero and
/// yields `None` for genuinely negative values.
fn tolerant_sqrt<T: Scalar>(x: T, epsilon: T) -> Option<T> {
    if is_zero(x, epsilon) {
        Some(T::zero())
    } else if x > T::zero() {
        Some(x.sqrt())
    } else {
        None
    }
}
