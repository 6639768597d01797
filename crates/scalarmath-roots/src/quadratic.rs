//! Quadratic solver.

use crate::polynomial::non_negative;
use crate::root_set::QuadraticRoots;
use scalarmath_core::tolerance::is_zero;
use scalarmath_core::Scalar;

/// Solves `a*x² + b*x + c = 0` for its real roots.
///
/// The discriminant `D = b² - 4ac` is classified against `epsilon`:
///
/// - `D < -epsilon`: no real roots
/// - `|D| <= epsilon`: one double root `-b / 2a`, reported once
/// - `D > epsilon`: two roots, in the order `(-b + √D) / 2a`, `(-b - √D) / 2a`
///
/// The two distinct roots are computed as `q / a` and `c / q` with
/// `q = -(b + sign(b)·√D) / 2`, which avoids subtracting nearly equal
/// values, and then emitted in the slot order given above.
///
/// If `a` is within `epsilon` of zero the equation is solved as the linear
/// `b*x + c = 0` instead, which has no root when `b` is also zero.
pub fn solve_quadratic<T: Scalar>(a: T, b: T, c: T, epsilon: T) -> QuadraticRoots<T> {
    let epsilon = non_negative(epsilon);
    let mut roots = QuadraticRoots::none();

    if is_zero(a, epsilon) {
        if !is_zero(b, epsilon) {
            roots.push(-c / b);
        }
        return roots;
    }

    let two = T::one() + T::one();
    let four = two + two;
    let discriminant = b * b - four * a * c;

    if is_zero(discriminant, epsilon) {
        roots.push(-b / (two * a));
    } else if discriminant > epsilon {
        let sqrt_d = discriminant.sqrt();
        let half = T::one() / two;
        if b.is_sign_negative() {
            // q = (-b + √D) / 2, so q / a is the "plus" root
            let q = -half * (b - sqrt_d);
            roots.push(q / a);
            roots.push(c / q);
        } else {
            // q = -(b + √D) / 2, so q / a is the "minus" root
            let q = -half * (b + sqrt_d);
            roots.push(c / q);
            roots.push(q / a);
        }
    }

    roots
}
