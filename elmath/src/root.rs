// elmath - elmath
// Module: Square Root
//
// Copyright (c) 2025 The elmath Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Square root by Newton (Heron) iteration.

use elmath_error::Error;

use crate::{
    consts::{EPS, MAX_NEWTON_STEPS, SQRT_STEP_STOP},
    outcome::Outcome,
    rounding::fabs,
};

/// Square root; see [`sqrt_checked`].
#[must_use]
pub fn sqrt(x: f64) -> f64 {
    sqrt_checked(x).value()
}

/// Square root with its error side channel.
///
/// - NaN: NaN, no error.
/// - `|x| < EPS`: exactly zero (a zero argument keeps its sign).
/// - negative (including `-inf`): NaN and a domain error.
/// - `+inf`: `+inf`.
pub fn sqrt_checked(x: f64) -> Outcome {
    if x.is_nan() {
        return Outcome::ok(x);
    }
    if fabs(x) < EPS {
        return Outcome::ok(if x == 0.0 { x } else { 0.0 });
    }
    if x < 0.0 {
        return Outcome::failed(f64::NAN, Error::SQRT_NEGATIVE);
    }
    if x == f64::INFINITY {
        return Outcome::ok(x);
    }
    Outcome::ok(newton_root(x))
}

/// Heron's iteration `root = (x + n/x) / 2` started at `n`, for finite
/// `n > 0`. Unlike [`sqrt`] there is no snapping of small arguments to zero.
///
/// Stops when two iterates differ by less than `SQRT_STEP_STOP`, or when the
/// (from the second step on, non-increasing) sequence stops decreasing, which
/// happens once the iterates are a rounding step apart.
pub(crate) fn newton_root(n: f64) -> f64 {
    let mut x = n;
    for step in 0..MAX_NEWTON_STEPS {
        let root = 0.5 * (x + n / x);
        if fabs(root - x) < SQRT_STEP_STOP {
            return root;
        }
        if step > 0 && root >= x {
            return x;
        }
        x = root;
    }
    cap_reached!("sqrt", n);
    x
}
