// elmath - elmath
// Module: Elementary Functions
//
// Copyright (c) 2025 The elmath Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Elementary and transcendental functions over `f64`.
//!
//! Every function is computed from first principles (Maclaurin series,
//! Newton iteration, square-and-multiply) and follows the special-value
//! conventions of a C math library: NaN propagates, infinities and signed
//! zeros are honoured, and out-of-domain arguments yield NaN.
//!
//! Functions that can raise a domain or pole error come in two forms. The
//! plain form returns the number only. The `*_checked` form returns an
//! [`Outcome`] carrying the same number plus the [`MathError`] the call
//! raised, so no global state is involved.
//!
//! ```
//! use elmath::{log_checked, pow, sqrt};
//!
//! assert!((sqrt(16.0) - 4.0).abs() < 1e-12);
//! assert_eq!(pow(2.0, 10.0), 1024.0);
//!
//! let pole = log_checked(0.0);
//! assert_eq!(pole.value(), f64::NEG_INFINITY);
//! assert!(pole.is_pole_error());
//! ```
//!
//! # Features
//!
//! - `std`: `std::error::Error` for [`MathError`] and diagnostics through
//!   the `log` facade (target `"elmath"`).
//! - `log`: the diagnostics alone, usable without `std`.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![deny(clippy::todo, clippy::unimplemented)]
#![warn(clippy::pedantic)]
// Allow lints that series code trips over, matching Cargo.toml
#![allow(clippy::float_arithmetic, clippy::cast_possible_truncation, clippy::cast_sign_loss)]

#[cfg(feature = "std")]
extern crate std;

// Must come first so the macros are visible in every module below
#[macro_use]
mod macros;

pub mod classify;
pub mod consts;
pub mod exp_log;
pub mod integer;
pub mod inverse_trig;
pub mod outcome;
pub mod power;
pub mod prelude;
pub mod root;
pub mod rounding;
pub mod traits;
pub mod trig;

pub use classify::{approx_eq, classify, is_infinite, is_nan, is_normal, FloatClass};
pub use exp_log::{exp, log, log_checked};
pub use integer::{abs, factorial, rising_factorial};
pub use inverse_trig::{acos, acos_checked, asin, asin_checked, atan, atan_custom};
pub use outcome::Outcome;
pub use power::{fast_pow, pow, pow_checked};
pub use root::{sqrt, sqrt_checked};
pub use rounding::{ceil, fabs, floor, fmod, fmod_checked};
pub use traits::ApproxEq;
pub use trig::{cos, sin, tan};
// Re-export error type from elmath-error for convenience
pub use elmath_error::Error as MathError;
pub use elmath_error::Result as MathResult;
