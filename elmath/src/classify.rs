// elmath - elmath
// Module: Tolerance and Classification
//
// Copyright (c) 2025 The elmath Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Tolerance-based comparison and special-value classification.
//!
//! Computed values are never compared exactly inside this crate; every
//! "is it zero / one / minus one" decision goes through [`approx_eq`].

use crate::consts::EPS;

/// The special-value class of an `f64` operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatClass {
    /// Not a number
    Nan,
    /// `+inf`
    PosInfinity,
    /// `-inf`
    NegInfinity,
    /// `+0.0`
    PosZero,
    /// `-0.0`
    NegZero,
    /// Any other finite value, normal or subnormal
    Finite,
}

impl FloatClass {
    /// Whether the class is one of the two infinities.
    #[must_use]
    pub const fn is_infinite(self) -> bool {
        matches!(self, Self::PosInfinity | Self::NegInfinity)
    }

    /// Whether the class is one of the two zeros.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        matches!(self, Self::PosZero | Self::NegZero)
    }
}

/// Classify `x` into its special-value class.
#[must_use]
pub fn classify(x: f64) -> FloatClass {
    if x.is_nan() {
        FloatClass::Nan
    } else if x.is_infinite() {
        if x.is_sign_negative() {
            FloatClass::NegInfinity
        } else {
            FloatClass::PosInfinity
        }
    } else if x == 0.0 {
        if x.is_sign_negative() {
            FloatClass::NegZero
        } else {
            FloatClass::PosZero
        }
    } else {
        FloatClass::Finite
    }
}

/// `true` iff `|a - b| < EPS`.
///
/// NaN is never approximately equal to anything, and two equal infinities are
/// not either (their difference is NaN).
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    a < b + EPS && a > b - EPS
}

/// `true` iff `x` is NaN.
#[must_use]
pub fn is_nan(x: f64) -> bool {
    x.is_nan()
}

/// `true` iff `x` is `+inf` or `-inf`.
#[must_use]
pub fn is_infinite(x: f64) -> bool {
    x.is_infinite()
}

/// `true` iff `x` is a normal finite number (not zero, not subnormal).
#[must_use]
pub fn is_normal(x: f64) -> bool {
    x.is_normal()
}

/// The zero carrying the requested sign.
pub(crate) const fn signed_zero(negative: bool) -> f64 {
    if negative { -0.0 } else { 0.0 }
}

/// The infinity carrying the requested sign.
pub(crate) const fn signed_infinity(negative: bool) -> f64 {
    if negative { f64::NEG_INFINITY } else { f64::INFINITY }
}
