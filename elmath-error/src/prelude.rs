// elmath - elmath-error
// Module: Error Prelude
//
// Copyright (c) 2025 The elmath Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for elmath-error
//!
//! Re-exports the error types so that dependent crates can pull them in with
//! a single glob import in both std and `no_std` builds.

pub use core::fmt::{self, Debug, Display};

pub use crate::{
    codes,
    domain_error,
    kinds,
    pole_error,
    Error,
    ErrorCategory,
    Result,
};
