// elmath - elmath
// Module: Fixed-Point Primitives
//
// Copyright (c) 2025 The elmath Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Absolute value, floor, ceiling and the floating remainder.

use elmath_error::{codes, kinds};

use crate::{
    classify::signed_zero,
    consts::{EPS, REMAINDER_PASSES, TWO52},
    outcome::Outcome,
};

/// `|x|`, decided by the sign bit so that `fabs(-0.0)` is `+0.0`.
#[must_use]
pub fn fabs(x: f64) -> f64 {
    if x.is_sign_negative() { -x } else { x }
}

/// Round toward zero. Values of magnitude `2^52` and above are already
/// integral; zeros keep their sign.
pub(crate) fn trunc(x: f64) -> f64 {
    if !x.is_finite() || fabs(x) >= TWO52 {
        return x;
    }
    let t = x as i64 as f64;
    if t == 0.0 { signed_zero(x.is_sign_negative()) } else { t }
}

/// The largest integer not greater than `x`. NaN and infinities pass through.
#[must_use]
pub fn floor(x: f64) -> f64 {
    if x.is_nan() || x.is_infinite() || x == 0.0 {
        return x;
    }
    let t = trunc(x);
    if t > x { t - 1.0 } else { t }
}

/// The smallest integer not less than `x`. NaN and infinities pass through;
/// inputs in `(-1, 0)` give `-0.0`.
#[must_use]
pub fn ceil(x: f64) -> f64 {
    if x.is_nan() || x.is_infinite() || x == 0.0 {
        return x;
    }
    let t = trunc(x);
    if t < x { t + 1.0 } else { t }
}

/// Floating remainder `x - trunc(x / y) * y`; see [`fmod_checked`].
#[must_use]
pub fn fmod(x: f64, y: f64) -> f64 {
    fmod_checked(x, y).value()
}

/// Floating remainder with its error side channel.
///
/// - NaN in either operand: NaN, no error.
/// - `x` infinite or `|y| < EPS`: NaN and a domain error.
/// - `|x| < EPS`: a zero with the sign of `x`.
/// - `y` infinite and `x` finite: `x`.
pub fn fmod_checked(x: f64, y: f64) -> Outcome {
    if x.is_nan() || y.is_nan() {
        return Outcome::ok(f64::NAN);
    }
    if x.is_infinite() || fabs(y) < EPS {
        return Outcome::failed(
            f64::NAN,
            kinds::domain_error(codes::FMOD_INVALID, "remainder of an infinite dividend or by zero"),
        );
    }
    if fabs(x) < EPS {
        return Outcome::ok(signed_zero(x.is_sign_negative()));
    }
    if y.is_infinite() {
        return Outcome::ok(x);
    }

    let mut r = x - trunc(x / y) * y;
    // For huge quotients the rounded product can leave |r| >= |y|
    for _ in 0..REMAINDER_PASSES {
        if fabs(r) < fabs(y) {
            break;
        }
        r -= trunc(r / y) * y;
    }
    if r != 0.0 && r.is_sign_negative() != x.is_sign_negative() {
        r += if r < 0.0 { fabs(y) } else { -fabs(y) };
    }
    if r == 0.0 || fabs(r) >= fabs(y) {
        return Outcome::ok(signed_zero(x.is_sign_negative()));
    }
    Outcome::ok(r)
}
