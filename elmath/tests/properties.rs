//! Property-based checks of the identities the functions must keep.

use elmath::{
    acos, asin, atan, ceil, cos, exp, fabs, floor, log, pow, sin, sqrt, sqrt_checked, tan, ApproxEq,
};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn fabs_is_non_negative_and_even(x in any::<f64>().prop_filter("finite", |x| x.is_finite())) {
        prop_assert!(fabs(x) >= 0.0);
        prop_assert_eq!(fabs(-x), fabs(x));
    }

    #[test]
    fn floor_and_ceil_bracket_the_argument(x in -1e15f64..1e15) {
        prop_assert!(floor(x) <= x);
        prop_assert!(ceil(x) >= x);
        prop_assert!(ceil(x) - floor(x) <= 1.0);
    }

    #[test]
    fn sqrt_squares_back(x in 1e-6f64..1e12) {
        let r = sqrt(x);
        prop_assert!((r * r - x).abs() <= 1e-6 * x.max(1.0), "sqrt({})^2 = {}", x, r * r);
    }

    #[test]
    fn sqrt_of_negative_is_a_domain_error(x in -1e12f64..-1e-5) {
        let outcome = sqrt_checked(x);
        prop_assert!(outcome.value().is_nan());
        prop_assert!(outcome.is_domain_error());
    }

    #[test]
    fn log_inverts_exp(x in -300.0f64..300.0) {
        prop_assert!((log(exp(x)) - x).abs() < 1e-6, "log(exp({})) = {}", x, log(exp(x)));
    }

    #[test]
    fn exp_inverts_log(x in 1e-6f64..1e6) {
        let back = exp(log(x));
        prop_assert!((back - x).abs() <= 1e-6 * x.max(1.0), "exp(log({})) = {}", x, back);
    }

    #[test]
    fn pythagorean_identity(x in -1e6f64..1e6) {
        let s = sin(x);
        let c = cos(x);
        prop_assert!((s * s + c * c).approx_eq(1.0), "sin^2 + cos^2 at {} = {}", x, s * s + c * c);
    }

    #[test]
    fn tan_tracks_reference_away_from_poles(
        x in (-10.0f64..10.0).prop_filter("away from odd multiples of pi/2", |x| x.cos().abs() > 0.1)
    ) {
        let expected = x.tan();
        prop_assert!(
            (tan(x) - expected).abs() <= 1e-5 * expected.abs().max(1.0),
            "tan({}) = {}, expected {}", x, tan(x), expected
        );
    }

    #[test]
    fn inverse_trig_ranges(x in -1.0f64..=1.0) {
        let a = acos(x);
        let s = asin(x);
        prop_assert!((-1e-12..=core::f64::consts::PI + 1e-12).contains(&a));
        prop_assert!(s.abs() <= core::f64::consts::FRAC_PI_2 + 1e-12);
        prop_assert!((a + s).approx_eq(core::f64::consts::FRAC_PI_2));
    }

    #[test]
    fn atan_is_odd(x in -1e6f64..1e6) {
        prop_assert_eq!(atan(-x), -atan(x));
    }

    #[test]
    fn pow_identities(x in prop_oneof![-1e6f64..-1e-5, 1e-5f64..0.999, 1.001f64..1e6]) {
        prop_assert_eq!(pow(x, 1.0), x);
        prop_assert_eq!(pow(x, 0.0), 1.0);
        prop_assert_eq!(pow(f64::NAN, 0.0), 1.0);
    }

    #[test]
    fn nan_propagates(x in any::<f64>().prop_filter("finite", |x| x.is_finite())) {
        let nan = f64::NAN;
        for value in [
            fabs(nan), floor(nan), ceil(nan), exp(nan), log(nan), sqrt(nan),
            sin(nan), cos(nan), tan(nan), atan(nan), acos(nan), asin(nan),
            pow(nan, 1.5),
        ] {
            prop_assert!(value.is_nan());
        }
        // a base of one (within EPS) wins over a NaN exponent
        prop_assert!(pow(x, nan).is_nan() || (x - 1.0).abs() < 1e-6);
    }
}
