// elmath - elmath
// Module: Constants
//
// Copyright (c) 2025 The elmath Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Mathematical constants and the tuning knobs of the iterative methods.
//!
//! Everything here is fixed at compile time; no function reads mutable
//! configuration.

// Mathematical constants

/// Archimedes' constant (π)
pub const PI: f64 = core::f64::consts::PI;
/// π/2
pub const FRAC_PI_2: f64 = core::f64::consts::FRAC_PI_2;
/// π/4
pub const FRAC_PI_4: f64 = core::f64::consts::FRAC_PI_4;
/// 2π, one full turn
pub const TAU: f64 = core::f64::consts::TAU;
/// 3π/2
pub const FRAC_3PI_2: f64 = PI * 1.5;
/// Euler's number (e)
pub const E: f64 = core::f64::consts::E;
/// ln(2)
pub const LN_2: f64 = core::f64::consts::LN_2;

/// 2^52. Every `f64` at or above this magnitude is an integer.
pub const TWO52: f64 = 4_503_599_627_370_496.0;
/// 2^53. Every `f64` at or above this magnitude is an even integer.
pub const TWO53: f64 = 9_007_199_254_740_992.0;
/// 2^54, the exact factor that lifts any subnormal into the normal range.
pub const SUBNORMAL_SCALE: f64 = 18_014_398_509_481_984.0;
/// log2 of [`SUBNORMAL_SCALE`].
pub const SUBNORMAL_SCALE_BITS: u32 = 54;

// Tolerances

/// Absolute tolerance of [`approx_eq`](crate::approx_eq) and of every
/// "near zero" / "near one" decision.
pub const EPS: f64 = 1e-6;
/// Stop a series once `|term / sum|` drops below this.
pub const SERIES_RELATIVE_STOP: f64 = 1e-100;
/// Stop the square root iteration once two iterates differ by less than this.
pub const SQRT_STEP_STOP: f64 = 1e-12;
/// Stop the sine series once `|term|` drops below this.
pub const SINE_TERM_STOP: f64 = EPS;

// Iteration limits

/// Number of Newton steps the logarithm always performs.
pub const LOG_NEWTON_STEPS: u32 = 100;
/// Safety cap on the number of terms of any series.
pub const MAX_SERIES_TERMS: u32 = 10_000;
/// Safety cap on the number of square root iterations.
pub const MAX_NEWTON_STEPS: u32 = 2_000;
/// Extra reduction passes of the floating remainder for huge quotients.
pub const REMAINDER_PASSES: u32 = 64;

// Cutoffs

/// Arguments at or below this make the exponential underflow to zero.
pub const EXP_UNDERFLOW: f64 = -745.2;
/// Arguments above this make the exponential overflow to infinity.
pub const EXP_OVERFLOW: f64 = 709.782_712_893_384;
/// `sin(±π)` is reported as this signed value instead of a rounding residue.
pub const SIN_PI_RESIDUE: f64 = 1e-50;
/// Above this magnitude `π/2 - atan(1/x)` rounds to `π/2`.
pub const ATAN_SATURATION: f64 = 1e16;
