// elmath - elmath
// Module: Integer and Factorial Utilities
//
// Copyright (c) 2025 The elmath Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Integer absolute value and the factorial products used as series
//! denominators.

/// `|x|`, saturating to `i32::MAX` for `i32::MIN`.
#[must_use]
pub fn abs(x: i32) -> i32 {
    x.saturating_abs()
}

/// The rising factorial `x (x + 1) (x + 2) ... (x + n - 1)`.
///
/// The empty product (`n == 0`) is 1.
#[must_use]
pub fn rising_factorial(x: f64, n: u32) -> f64 {
    (0..n).fold(1.0, |acc, k| acc * (x + f64::from(k)))
}

/// `n!` as a float. Overflows to `+inf` above `170!`.
#[must_use]
pub fn factorial(n: u32) -> f64 {
    rising_factorial(1.0, n)
}
