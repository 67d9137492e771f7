// elmath - elmath
// Module: Prelude
//
// Copyright (c) 2025 The elmath Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Crate prelude for `elmath`
//!
//! `use elmath::prelude::*;` brings in every function, the [`Outcome`] side
//! channel and the error types, identically in std and `no_std` builds.

// Re-export from elmath-error using its prelude
pub use elmath_error::prelude::*;

pub use crate::{
    classify::{FloatClass, approx_eq, classify, is_infinite, is_nan, is_normal},
    consts,
    exp_log::{exp, log, log_checked},
    integer::{abs, factorial, rising_factorial},
    inverse_trig::{acos, acos_checked, asin, asin_checked, atan, atan_custom},
    outcome::Outcome,
    power::{fast_pow, pow, pow_checked},
    root::{sqrt, sqrt_checked},
    rounding::{ceil, fabs, floor, fmod, fmod_checked},
    traits::ApproxEq,
    trig::{cos, sin, tan},
};
