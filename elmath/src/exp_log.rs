// elmath - elmath
// Module: Exponential and Logarithm
//
// Copyright (c) 2025 The elmath Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Exponential and natural logarithm.
//!
//! The exponential is a Maclaurin series with a convergence-driven term
//! count. The logarithm is its inverse: argument reduction by powers of e
//! followed by Newton steps that evaluate [`exp`].

use elmath_error::Error;

use crate::{
    consts::{
        E, EXP_OVERFLOW, EXP_UNDERFLOW, LN_2, LOG_NEWTON_STEPS, MAX_SERIES_TERMS, SERIES_RELATIVE_STOP,
        SUBNORMAL_SCALE, SUBNORMAL_SCALE_BITS,
    },
    outcome::Outcome,
    rounding::fabs,
};

/// `e^x`.
///
/// NaN propagates, `+inf` gives `+inf`, arguments at or below the underflow
/// cutoff (including `-inf`) give `0`, arguments above the overflow cutoff
/// give `+inf`. Negative arguments are evaluated as the reciprocal of the
/// series at `|x|`, which keeps the alternating terms from cancelling.
#[must_use]
pub fn exp(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if x == f64::INFINITY || x > EXP_OVERFLOW {
        return f64::INFINITY;
    }
    if x <= EXP_UNDERFLOW {
        return 0.0;
    }
    if x < 0.0 {
        if -x > EXP_OVERFLOW {
            // e^x = (1/e^(|x|/2))^2 reaches into the subnormal range
            let half = 1.0 / maclaurin_exp(-x * 0.5);
            return half * half;
        }
        return 1.0 / maclaurin_exp(-x);
    }
    maclaurin_exp(x)
}

/// `Σ xⁿ/n!`, each term derived from the previous one, until the latest term
/// is negligible relative to the sum.
fn maclaurin_exp(x: f64) -> f64 {
    let mut sum = 1.0;
    let mut term = 1.0;
    let mut n = 1u32;
    while fabs(term / sum) > SERIES_RELATIVE_STOP {
        if n > MAX_SERIES_TERMS {
            cap_reached!("exp", x);
            break;
        }
        // x/n first: term * x can overflow before the division near the cutoff
        term *= x / f64::from(n);
        sum += term;
        n += 1;
    }
    sum
}

/// Natural logarithm; see [`log_checked`].
#[must_use]
pub fn log(x: f64) -> f64 {
    log_checked(x).value()
}

/// Natural logarithm with its error side channel.
///
/// - NaN: NaN, no error.
/// - `+inf`: `+inf`.
/// - `±0`: `-inf` and a pole error.
/// - negative (including `-inf`): NaN and a domain error.
pub fn log_checked(x: f64) -> Outcome {
    if x.is_nan() {
        return Outcome::ok(x);
    }
    if x == f64::INFINITY {
        return Outcome::ok(x);
    }
    if x == 0.0 {
        return Outcome::failed(f64::NEG_INFINITY, Error::LOG_ZERO);
    }
    if x < 0.0 {
        return Outcome::failed(f64::NAN, Error::LOG_NEGATIVE);
    }

    // Subnormals carry too few significant bits for the e-reduction below;
    // scaling by a power of two is exact.
    let (mut reduced, scale_shift) = if x < f64::MIN_POSITIVE {
        (x * SUBNORMAL_SCALE, f64::from(SUBNORMAL_SCALE_BITS) * LN_2)
    } else {
        (x, 0.0)
    };

    // Bring x into [1, e) and remember how many factors of e were removed.
    let mut e_repeat: i32 = 0;
    while reduced >= E {
        reduced /= E;
        e_repeat += 1;
    }
    while reduced < 1.0 {
        reduced *= E;
        e_repeat -= 1;
    }

    let mut result = 0.0;
    for _ in 0..LOG_NEWTON_STEPS {
        let guess = exp(result);
        result += 2.0 * (reduced - guess) / (reduced + guess);
    }
    Outcome::ok(result + f64::from(e_repeat) - scale_shift)
}
