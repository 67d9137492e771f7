// elmath - elmath-error
// Module: Error Codes
//
// Copyright (c) 2025 The elmath Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for elmath

// Domain error codes (1000-1099)
/// Square root of a negative, non-negligible argument
pub const SQRT_NEGATIVE: u16 = 1000;
/// Natural logarithm of a negative argument (including `-inf`)
pub const LOG_NEGATIVE: u16 = 1001;
/// Negative finite base raised to a finite non-integer exponent
pub const POW_NEGATIVE_BASE_FRACTIONAL_EXPONENT: u16 = 1002;
/// Arc-cosine of a finite argument outside `[-1, 1]`
pub const ACOS_OUT_OF_RANGE: u16 = 1003;
/// Arc-sine of a finite argument outside `[-1, 1]`
pub const ASIN_OUT_OF_RANGE: u16 = 1004;
/// Floating remainder with an infinite dividend or a zero divisor
pub const FMOD_INVALID: u16 = 1005;

// Pole error codes (2000-2099)
/// Natural logarithm of zero
pub const LOG_ZERO: u16 = 2000;
/// Zero (or a negligible base) raised to a negative exponent
pub const POW_ZERO_NEGATIVE_EXPONENT: u16 = 2001;
