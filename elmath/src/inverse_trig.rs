// elmath - elmath
// Module: Inverse Trigonometric Functions
//
// Copyright (c) 2025 The elmath Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Arctangent (two variants), arc-cosine and arc-sine.
//!
//! Both arctangents sum the same series. [`atan`] is the public, general
//! one. [`atan_custom`] is the building block of [`acos`]: it corrects the
//! quadrant with a sign-dependent "magic" value instead of the reciprocal
//! identity, and saturates to `±π/2` for very large arguments.

use elmath_error::{codes, kinds};

use crate::{
    consts::{ATAN_SATURATION, FRAC_PI_2, FRAC_PI_4, MAX_SERIES_TERMS, PI, SERIES_RELATIVE_STOP},
    outcome::Outcome,
    root::newton_root,
    rounding::fabs,
    traits::ApproxEq,
};

/// `atan(t)` for `|t| <= 1`.
///
/// One half-angle step `atan(t) = 2 atan(t / (1 + sqrt(1 + t²)))` brings the
/// argument below `tan(π/8)`, after which `Σ (-1)ⁿ u^(2n+1) / (2n+1)`
/// converges quickly even for `|t|` close to 1.
fn atan_series(t: f64) -> f64 {
    let u = t / (1.0 + newton_root(1.0 + t * t));
    let u2 = u * u;

    let mut power = u;
    let mut term = u;
    let mut sum = u;
    let mut n = 1u32;
    while fabs(term / sum) > SERIES_RELATIVE_STOP {
        if n > MAX_SERIES_TERMS {
            cap_reached!("atan", t);
            break;
        }
        power *= -u2;
        term = power / f64::from(2 * n + 1);
        sum += term;
        n += 1;
    }
    2.0 * sum
}

/// Arctangent of `x`, in `[-π/2, π/2]`.
///
/// `±inf` gives `±π/2`, NaN propagates, exactly `±1` gives `±π/4`. Other
/// arguments use the series directly when `|x| < 1` and the identity
/// `atan(x) = sign(x) π/2 - atan(1/x)` otherwise.
#[must_use]
pub fn atan(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if x == f64::INFINITY {
        return FRAC_PI_2;
    }
    if x == f64::NEG_INFINITY {
        return -FRAC_PI_2;
    }
    if x == 1.0 {
        return FRAC_PI_4;
    }
    if x == -1.0 {
        return -FRAC_PI_4;
    }

    if x > -1.0 && x < 1.0 {
        atan_series(x)
    } else {
        let quarter_turn = if x > 0.0 { FRAC_PI_2 } else { -FRAC_PI_2 };
        quarter_turn - atan_series(1.0 / x)
    }
}

/// Arctangent variant used by [`acos`].
///
/// - NaN propagates.
/// - Infinite or `|x| > 1e16` ("special"): `±π/2` by the sign of `x`.
/// - Within `EPS` of `±1`: `±π/4`.
/// - Within `EPS` of zero: `0`.
/// - `|x| < 1`: the series at `x`.
/// - otherwise: `magic - atan(1/x)` with `magic = π|x| / (2x)`.
#[must_use]
pub fn atan_custom(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }

    let within_unit = fabs(x) < 1.0;
    let special = x.is_infinite() || fabs(x) > ATAN_SATURATION;
    if special {
        return if x > 0.0 { FRAC_PI_2 } else { -FRAC_PI_2 };
    }

    let mut res = 0.0;
    if x.approx_eq(1.0) {
        res = FRAC_PI_4;
    } else if x.approx_eq(-1.0) {
        res = -FRAC_PI_4;
    } else if !x.approx_zero() {
        res = if within_unit { atan_series(x) } else { atan_series(1.0 / x) };
    }

    if !within_unit && res != 0.0 {
        let magic = PI * fabs(x) / (2.0 * x);
        res = magic - res;
    }
    res
}

/// Arc-cosine; see [`acos_checked`].
#[must_use]
pub fn acos(x: f64) -> f64 {
    acos_checked(x).value()
}

/// Arc-cosine with its error side channel, in `[0, π]`.
///
/// - Within `EPS` of zero: `π/2`.
/// - NaN or infinite: NaN, no error.
/// - Negative: `π - acos(-x)`.
/// - `x > 1`: NaN and a domain error.
/// - Exactly 1: 0.
/// - Otherwise `atan_custom(sqrt(1 - x²) / x)`.
pub fn acos_checked(x: f64) -> Outcome {
    if x.approx_zero() {
        return Outcome::ok(FRAC_PI_2);
    }
    if x.is_nan() || x.is_infinite() {
        return Outcome::ok(f64::NAN);
    }
    if x < 0.0 {
        return acos_checked(-x).map(|r| PI - r);
    }
    if x > 1.0 {
        return Outcome::failed(
            f64::NAN,
            kinds::domain_error(codes::ACOS_OUT_OF_RANGE, "arc-cosine argument outside [-1, 1]"),
        );
    }
    if x == 1.0 {
        return Outcome::ok(0.0);
    }
    Outcome::ok(atan_custom(newton_root(1.0 - x * x) / x))
}

/// Arc-sine; see [`asin_checked`].
#[must_use]
pub fn asin(x: f64) -> f64 {
    asin_checked(x).value()
}

/// Arc-sine with its error side channel, in `[-π/2, π/2]`.
///
/// - NaN or infinite: NaN, no error.
/// - `|x| > 1`: NaN and a domain error.
/// - Exactly `±1`: `π / (2x)`.
/// - Otherwise `π/2 - acos(x)`.
pub fn asin_checked(x: f64) -> Outcome {
    if x.is_nan() || x.is_infinite() {
        return Outcome::ok(f64::NAN);
    }
    if x > 1.0 || x < -1.0 {
        return Outcome::failed(
            f64::NAN,
            kinds::domain_error(codes::ASIN_OUT_OF_RANGE, "arc-sine argument outside [-1, 1]"),
        );
    }
    if x == 1.0 || x == -1.0 {
        return Outcome::ok(PI / (2.0 * x));
    }
    acos_checked(x).map(|r| FRAC_PI_2 - r)
}
