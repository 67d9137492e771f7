// elmath - elmath-error
// Module: Error Handling
//
// Copyright (c) 2025 The elmath Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error handling for the elmath elementary function library.
//!
//! The numeric functions never fail in the Rust sense: every call returns a
//! value (a number, an infinity or NaN). What this crate describes is the
//! *side channel* of a call, the condition a C math library would report
//! through `errno`.
//!
//! # Error Categories
//!
//! ## Domain Errors (1000-1099)
//! - Square root of a negative number
//! - Logarithm of a negative number
//! - Negative base with a fractional exponent
//! - Arc-sine / arc-cosine outside `[-1, 1]`
//! - Floating remainder with an infinite dividend or zero divisor
//!
//! ## Pole Errors (2000-2099)
//! - Logarithm of zero
//! - Zero raised to a negative power
//!
//! # Usage
//!
//! ```
//! use elmath_error::{codes, kinds, Error, ErrorCategory};
//!
//! let error = kinds::domain_error(codes::SQRT_NEGATIVE, "square root of a negative number");
//! assert_eq!(error.category, ErrorCategory::Domain);
//! assert!(error.is_domain_error());
//!
//! let same = Error::new(ErrorCategory::Domain, codes::SQRT_NEGATIVE, "other text");
//! assert_eq!(error, same);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)] // Rule 2
#![deny(clippy::all)]
#![deny(clippy::perf)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

// Standard library support
#[cfg(feature = "std")]
extern crate std;

/// Error codes for elmath
pub mod codes;
/// Error and error category types
pub mod errors;
/// Error kind constructors
pub mod kinds;

pub mod prelude;

// Re-export key types
pub use errors::{Error, ErrorCategory};
pub use kinds::{domain_error, pole_error};

/// A specialized `Result` type for elmath operations.
///
/// Produced by `Outcome::into_result` in the `elmath` crate for callers that
/// prefer `?` over inspecting the error side channel.
pub type Result<T> = core::result::Result<T, Error>;
