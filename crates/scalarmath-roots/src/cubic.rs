//! Cubic solver.
//!
//! The cubic is normalized and depressed with `x = t - b/(3a)` to
//! `t³ + p·t + q = 0`, then classified by `Δ = (q/2)² + (p/3)³`:
//!
//! | Δ              | roots                                         |
//! |----------------|-----------------------------------------------|
//! | `> epsilon`    | one real root (Cardano)                       |
//! | `≈ 0`          | a single and a double root, or a triple root  |
//! | `< -epsilon`   | three distinct real roots (trigonometric)     |

use crate::polynomial::non_negative;
use crate::quadratic::solve_quadratic;
use crate::root_set::CubicRoots;
use scalarmath_core::tolerance::is_zero;
use scalarmath_core::Scalar;

/// Solves `a*x³ + b*x² + c*x + d = 0` for its real roots.
///
/// Multiple roots are reported once: a double root occupies one slot and a
/// triple root yields a count of 1. The slot order is fixed by the branch:
///
/// - one real root: `[t]`
/// - single and double root: `[2u, -u]` with `u = ∛(-q/2)`, unsorted
/// - three real roots: `[t₀, t₁, t₂]` with `t_k = 2√(-p/3)·cos(φ - 2πk/3)`,
///   which comes out in decreasing order
///
/// If `a` is within `epsilon` of zero the equation is solved as the
/// quadratic `b*x² + c*x + d = 0` instead.
pub fn solve_cubic<T: Scalar>(a: T, b: T, c: T, d: T, epsilon: T) -> CubicRoots<T> {
    let epsilon = non_negative(epsilon);
    if is_zero(a, epsilon) {
        return solve_quadratic(b, c, d, epsilon).widen();
    }

    let two = <T as Scalar>::from_f64(2.0);
    let three = <T as Scalar>::from_f64(3.0);
    let twenty_seven = <T as Scalar>::from_f64(27.0);

    // Normal form x³ + A·x² + B·x + C
    let a_n = b / a;
    let b_n = c / a;
    let c_n = d / a;

    // Depressed form t³ + p·t + q
    let sq_a = a_n * a_n;
    let p = b_n - sq_a / three;
    let q = two * a_n * sq_a / twenty_seven - a_n * b_n / three + c_n;

    let half_q = q / two;
    let third_p = p / three;
    let cb_third_p = third_p * third_p * third_p;
    let discriminant = half_q * half_q + cb_third_p;

    let mut roots = CubicRoots::none();
    if is_zero(discriminant, epsilon) {
        if is_zero(p, epsilon) && is_zero(q, epsilon) {
            // triple root
            roots.push(T::zero());
        } else {
            let u = (-half_q).cbrt();
            roots.push(two * u);
            roots.push(-u);
        }
    } else if discriminant < T::zero() {
        // Casus irreducibilis
        let cos_3phi = (-half_q / (-cb_third_p).sqrt()).max(-T::one()).min(T::one());
        let phi = cos_3phi.acos() / three;
        let m = two * (-third_p).sqrt();
        roots.push(m * phi.cos());
        roots.push(-m * (phi + T::FRAC_PI_3()).cos());
        roots.push(-m * (phi - T::FRAC_PI_3()).cos());
    } else if discriminant > epsilon {
        let sqrt_d = discriminant.sqrt();
        let u = (sqrt_d - half_q).cbrt();
        let v = -(sqrt_d + half_q).cbrt();
        roots.push(u + v);
    }

    let shift = a_n / three;
    roots.map(|t| t - shift)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPS: f64 = 1e-3;

    #[test]
    fn test_one_real_root() {
        let roots = solve_cubic(1.0, 0.0, -2.0, 4.0, EPS);
        assert_eq!(roots.count(), 1);
        assert_relative_eq!(roots[0], -2.0, epsilon = 1e-8);
        assert!(roots[1].is_nan());
        assert!(roots[2].is_nan());

        let roots = solve_cubic(9.0, -43.0, 145.0, -91.0, EPS);
        assert_eq!(roots.count(), 1);
        assert_relative_eq!(roots[0], 7.0 / 9.0, epsilon = 1e-8);
    }

    #[test]
    fn test_three_real_roots_in_decreasing_order() {
        let roots = solve_cubic(1.0, -4.0, -7.0, 22.0, EPS);
        assert_eq!(roots.count(), 3);
        assert_relative_eq!(roots[0], 4.464101615, epsilon = 1e-8);
        assert_relative_eq!(roots[1], 2.0, epsilon = 1e-8);
        assert_relative_eq!(roots[2], -2.464101615, epsilon = 1e-8);

        let roots = solve_cubic(1.0, 0.0, -7.0 / 3.0, 20.0 / 27.0, EPS);
        assert_eq!(roots.count(), 3);
        assert_relative_eq!(roots[0], 4.0 / 3.0, epsilon = 1e-8);
        assert_relative_eq!(roots[1], 1.0 / 3.0, epsilon = 1e-8);
        assert_relative_eq!(roots[2], -10.0 / 6.0, epsilon = 1e-8);
    }

    #[test]
    fn test_double_root_reported_once() {
        // (x + 2)(x - 1)²
        let roots = solve_cubic(1.0, 0.0, -3.0, 2.0, EPS);
        assert_eq!(roots.count(), 2);
        assert_relative_eq!(roots[0], -2.0, epsilon = 1e-8);
        assert_relative_eq!(roots[1], 1.0, epsilon = 1e-8);
        assert!(roots[2].is_nan());
    }

    #[test]
    fn test_triple_root() {
        // (x - 1)³
        let roots = solve_cubic(1.0, -3.0, 3.0, -1.0, EPS);
        assert_eq!(roots.count(), 1);
        assert_relative_eq!(roots[0], 1.0, epsilon = 1e-8);

        let roots = solve_cubic(2.0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(roots.as_slice(), &[0.0]);
    }

    #[test]
    fn test_quadratic_fallback() {
        let roots = solve_cubic(0.0, 1.0, 6.0, -16.0, EPS);
        assert_eq!(roots.count(), 2);
        assert_relative_eq!(roots[0], 2.0);
        assert_relative_eq!(roots[1], -8.0);
        assert!(roots[2].is_nan());

        let roots = solve_cubic(0.0, 0.0, 0.0, 1.0, EPS);
        assert!(roots.is_empty());
    }

    #[test]
    fn test_scaled_coefficients_give_same_roots() {
        let unit = solve_cubic(1.0, -4.0, -7.0, 22.0, EPS);
        let scaled = solve_cubic(-2.0, 8.0, 14.0, -44.0, EPS);
        assert_relative_eq!(unit, scaled, epsilon = 1e-9);
    }

    #[test]
    fn test_overflow_yields_no_counted_roots() {
        // (q/2)² and (p/3)³ overflow to opposite infinities, so Δ is NaN
        let roots = solve_cubic(1.0, 1e120, 1.0, 1.0, EPS);
        assert!(roots.iter().all(|x| x.is_finite()));
        assert!(roots.slots()[roots.count()..].iter().all(|x| x.is_nan()));

        let roots = solve_cubic(1.0, f64::NAN, 0.0, 0.0, EPS);
        assert!(roots.is_empty());
    }

    #[test]
    fn test_single_precision() {
        let roots = solve_cubic(1.0_f32, -4.0, -7.0, 22.0, f32::ALMOST_ZERO);
        assert_eq!(roots.count(), 3);
        assert_relative_eq!(roots[0], 4.464_101_6_f32, epsilon = 1e-4);
        assert_relative_eq!(roots[1], 2.0_f32, epsilon = 1e-4);
        assert_relative_eq!(roots[2], -2.464_101_6_f32, epsilon = 1e-4);
    }
}
