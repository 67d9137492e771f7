// elmath - elmath-error
// Module: Error Kinds
//
// Copyright (c) 2025 The elmath Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Constructors for the error kinds elmath reports.

use crate::{Error, ErrorCategory};

/// Create a domain error
#[must_use]
pub const fn domain_error(code: u16, message: &'static str) -> Error {
    Error::new(ErrorCategory::Domain, code, message)
}

/// Create a pole error
#[must_use]
pub const fn pole_error(code: u16, message: &'static str) -> Error {
    Error::new(ErrorCategory::Pole, code, message)
}
