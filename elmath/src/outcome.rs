// elmath - elmath
// Module: Outcome
//
// Copyright (c) 2025 The elmath Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! A numeric result paired with the error a call raised, if any.
//!
//! This is the per-call replacement for a process-wide `errno`: the value is
//! always present (NaN for domain errors, a signed infinity for pole errors)
//! and the error travels next to it instead of through shared state.

use elmath_error::{Error, Result};

/// The value of a `*_checked` call and the error it raised.
#[derive(Debug, Clone, Copy)]
pub struct Outcome {
    value: f64,
    error: Option<Error>,
}

impl Outcome {
    /// A result without an error.
    #[must_use]
    pub const fn ok(value: f64) -> Self {
        Self { value, error: None }
    }

    /// A result accompanied by `error`.
    #[must_use]
    pub fn failed(value: f64, error: Error) -> Self {
        error_recorded!(value, error);
        Self {
            value,
            error: Some(error),
        }
    }

    /// The numeric result, whatever the error state.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.value
    }

    /// The error raised by the call, if any.
    #[must_use]
    pub const fn error(self) -> Option<Error> {
        self.error
    }

    /// Whether the call raised a domain error.
    #[must_use]
    pub fn is_domain_error(&self) -> bool {
        self.error.is_some_and(|e| e.is_domain_error())
    }

    /// Whether the call raised a pole error.
    #[must_use]
    pub fn is_pole_error(&self) -> bool {
        self.error.is_some_and(|e| e.is_pole_error())
    }

    /// Transform the value and keep the error.
    #[must_use]
    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Self {
        Self {
            value: f(self.value),
            error: self.error,
        }
    }

    /// `Ok(value)` when no error was raised, `Err(error)` otherwise.
    pub fn into_result(self) -> Result<f64> {
        match self.error {
            None => Ok(self.value),
            Some(error) => Err(error),
        }
    }
}

impl From<f64> for Outcome {
    fn from(value: f64) -> Self {
        Self::ok(value)
    }
}
