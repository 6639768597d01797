//! Property tests for the polynomial solvers.

use proptest::prelude::*;
use scalarmath_roots::prelude::*;

fn assert_well_formed<const N: usize>(roots: &RootSet<f64, N>) -> std::result::Result<(), TestCaseError> {
    prop_assert!(roots.count() <= N);
    for (i, slot) in roots.slots().iter().enumerate() {
        if i < roots.count() {
            prop_assert!(slot.is_finite(), "root {} is {}", i, slot);
        } else {
            prop_assert!(slot.is_nan(), "padding slot {} is {}", i, slot);
        }
    }
    Ok(())
}

fn sorted(values: &[f64]) -> Vec<f64> {
    let mut values = values.to_vec();
    values.sort_by(f64::total_cmp);
    values
}

fn leading() -> impl Strategy<Value = f64> {
    prop_oneof![-10.0..-0.5f64, 0.5..10.0f64]
}

fn extreme() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
        Just(0.0),
        prop_oneof![Just(1.0), Just(-1.0)].prop_flat_map(|sign| {
            (-320i32..300).prop_map(move |exp| sign * 10f64.powi(exp))
        }),
        -10.0..10.0f64,
    ]
}

proptest! {
    #[test]
    fn quadratic_roots_have_small_residual(a in leading(), b in -10.0..10.0f64, c in -10.0..10.0f64) {
        let epsilon = f64::ALMOST_ZERO;
        let roots = solve_quadratic(a, b, c, epsilon);
        assert_well_formed(&roots)?;
        for &r in &roots {
            let residual = evaluate(&[a, b, c], r).abs();
            let scale = a.abs() * r * r + b.abs() * r.abs() + c.abs();
            prop_assert!(residual <= epsilon / (4.0 * a.abs()) + 1e-12 * (1.0 + scale));
        }
    }

    #[test]
    fn quadratic_two_roots_emit_plus_root_first(a in leading(), b in -10.0..10.0f64, c in -10.0..10.0f64) {
        let roots = solve_quadratic(a, b, c, 0.0);
        if roots.count() == 2 {
            let sqrt_d = (b * b - 4.0 * a * c).sqrt();
            let plus = (-b + sqrt_d) / (2.0 * a);
            let minus = (-b - sqrt_d) / (2.0 * a);
            prop_assert!((roots[0] - plus).abs() <= 1e-6 * (1.0 + plus.abs()));
            prop_assert!((roots[1] - minus).abs() <= 1e-6 * (1.0 + minus.abs()));
        }
    }

    #[test]
    fn solvers_are_well_formed(
        a in -10.0..10.0f64,
        b in -10.0..10.0f64,
        c in -10.0..10.0f64,
        d in -10.0..10.0f64,
        e in -10.0..10.0f64,
    ) {
        let epsilon = f64::ALMOST_ZERO;
        assert_well_formed(&solve_quadratic(a, b, c, epsilon))?;
        assert_well_formed(&solve_cubic(a, b, c, d, epsilon))?;
        assert_well_formed(&solve_quartic(a, b, c, d, e, epsilon))?;
    }

    #[test]
    fn solvers_only_count_finite_roots(
        a in extreme(),
        b in extreme(),
        c in extreme(),
        d in extreme(),
        e in extreme(),
        epsilon in prop_oneof![Just(0.0), Just(f64::ALMOST_ZERO)],
    ) {
        assert_well_formed(&solve_quadratic(a, b, c, epsilon))?;
        assert_well_formed(&solve_cubic(a, b, c, d, epsilon))?;
        assert_well_formed(&solve_quartic(a, b, c, d, e, epsilon))?;
    }

    #[test]
    fn cubic_with_distinct_roots_finds_them_in_decreasing_order(
        r1 in -5.0..5.0f64,
        g1 in 1.0..3.0f64,
        g2 in 1.0..3.0f64,
        a in leading(),
    ) {
        let (r2, r3) = (r1 - g1, r1 - g1 - g2);
        let roots = solve_cubic(
            a,
            -a * (r1 + r2 + r3),
            a * (r1 * r2 + r1 * r3 + r2 * r3),
            -a * r1 * r2 * r3,
            f64::ALMOST_ZERO,
        );
        prop_assert_eq!(roots.count(), 3);
        for (found, want) in roots.iter().zip([r1, r2, r3]) {
            prop_assert!((found - want).abs() < 1e-6, "found {} want {}", found, want);
        }
    }

    #[test]
    fn quartic_with_distinct_roots_finds_all_four(
        r1 in -5.0..5.0f64,
        gaps in prop::array::uniform3(0.5..3.0f64),
    ) {
        let r2 = r1 - gaps[0];
        let r3 = r2 - gaps[1];
        let r4 = r3 - gaps[2];

        // (x - r1)(x - r2)(x - r3)(x - r4)
        let s1 = r1 + r2 + r3 + r4;
        let s2 = r1 * r2 + r1 * r3 + r1 * r4 + r2 * r3 + r2 * r4 + r3 * r4;
        let s3 = r1 * r2 * r3 + r1 * r2 * r4 + r1 * r3 * r4 + r2 * r3 * r4;
        let s4 = r1 * r2 * r3 * r4;

        let roots = solve_quartic(1.0, -s1, s2, -s3, s4, 1e-12);
        prop_assert_eq!(roots.count(), 4);
        for (found, want) in sorted(roots.as_slice()).into_iter().zip(sorted(&[r1, r2, r3, r4])) {
            prop_assert!((found - want).abs() < 1e-6, "found {} want {}", found, want);
        }
    }

    #[test]
    fn quartic_roots_are_invariant_under_scaling(
        b in -10.0..10.0f64,
        c in -10.0..10.0f64,
        d in -10.0..10.0f64,
        e in -10.0..10.0f64,
    ) {
        // Normalization divides by the leading coefficient, so a power of two
        // scale leaves every intermediate value bit-identical.
        let unit = solve_quartic(1.0, b, c, d, e, f64::ALMOST_ZERO);
        let scaled = solve_quartic(4.0, 4.0 * b, 4.0 * c, 4.0 * d, 4.0 * e, f64::ALMOST_ZERO);
        prop_assert_eq!(unit, scaled);
    }
}
