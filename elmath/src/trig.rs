// elmath - elmath
// Module: Trigonometric Functions
//
// Copyright (c) 2025 The elmath Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Sine, cosine and tangent by range reduction and Maclaurin series.

use crate::{
    consts::{FRAC_3PI_2, FRAC_PI_2, MAX_SERIES_TERMS, PI, SERIES_RELATIVE_STOP, SINE_TERM_STOP, SIN_PI_RESIDUE, TAU},
    integer::factorial,
    power::fast_pow,
    rounding::{fabs, fmod},
};

/// Sine of `x` (radians).
///
/// NaN and infinities give NaN. Exactly `±π` gives `±1e-50`, a signed
/// residue that keeps `tan(±π)` finite. Other arguments are folded into
/// `[-2π, 2π]` and summed as `Σ (-1)ⁿ x^(2n+1) / (2n+1)!` until a term drops
/// below `EPS`.
#[must_use]
pub fn sin(x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }
    if x == PI {
        return SIN_PI_RESIDUE;
    }
    if x == -PI {
        return -SIN_PI_RESIDUE;
    }
    if x == 0.0 {
        return x;
    }

    let x = if fabs(x) > TAU { fmod(x, TAU) } else { x };

    let mut sum = 0.0;
    let mut n: u32 = 0;
    loop {
        let sign = if n % 2 == 0 { 1.0 } else { -1.0 };
        let k = 2 * n + 1;
        let term = sign * fast_pow(x, i64::from(k)) / factorial(k);
        sum += term;
        if fabs(term) < SINE_TERM_STOP {
            break;
        }
        n += 1;
        if n > MAX_SERIES_TERMS {
            cap_reached!("sin", x);
            break;
        }
    }
    sum
}

/// Cosine of `x` (radians).
///
/// NaN and infinities give NaN. The argument is reduced modulo 2π, reflected
/// into the first quadrant with a tracked sign, and summed as
/// `Σ (-1)ⁿ x^(2n) / (2n)!` until `|term / sum|` is negligible.
#[must_use]
pub fn cos(x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }

    // cos is even, so the reduced angle can be taken in [0, 2π)
    let mut x = fabs(fmod(x, TAU));
    let mut sign = 1.0;
    if x > FRAC_PI_2 && x <= PI {
        x = PI - x;
        sign = -sign;
    } else if x > PI && x <= FRAC_3PI_2 {
        x -= PI;
        sign = -sign;
    } else if x > FRAC_3PI_2 {
        x = TAU - x;
    }

    let mut sum = 1.0;
    let mut term = 1.0;
    let mut p = 1u32;
    while fabs(term / sum) > SERIES_RELATIVE_STOP {
        if p > MAX_SERIES_TERMS {
            cap_reached!("cos", x);
            break;
        }
        let p_f = f64::from(p);
        term = -term * x * x / ((2.0 * p_f - 1.0) * (2.0 * p_f));
        sum += term;
        p += 1;
    }
    sum * sign
}

/// Tangent of `x` (radians), `sin(x) / cos(x)`.
///
/// NaN and infinities give NaN. Near odd multiples of π/2 the quotient may
/// be very large, or infinite when the cosine comes out as exactly zero.
#[must_use]
pub fn tan(x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }
    sin(x) / cos(x)
}
