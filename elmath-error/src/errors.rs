// elmath - elmath-error
// Module: Error Types
//
// Copyright (c) 2025 The elmath Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The `Error` value reported alongside a numeric result.

use core::fmt;

use crate::codes;

/// `Error` categories for elmath operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// The argument lies outside the function's real-valued domain. The
    /// accompanying value is NaN.
    Domain = 1,
    /// The argument is an exact pole of the function. The accompanying value
    /// is a signed infinity.
    Pole   = 2,
}

/// elmath `Error` type
///
/// Categorised error with a numeric code and a static message. It is `Copy`
/// so that it can travel next to an `f64` without allocation.
#[derive(Debug, Copy, Clone)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  &'static str,
}

impl Error {
    /// Square root of a negative number
    pub const SQRT_NEGATIVE: Self = Self::new(
        ErrorCategory::Domain,
        codes::SQRT_NEGATIVE,
        "square root of a negative number",
    );
    /// Logarithm of a negative number
    pub const LOG_NEGATIVE: Self = Self::new(
        ErrorCategory::Domain,
        codes::LOG_NEGATIVE,
        "logarithm of a negative number",
    );
    /// Logarithm of zero
    pub const LOG_ZERO: Self =
        Self::new(ErrorCategory::Pole, codes::LOG_ZERO, "logarithm of zero");

    /// Create a new error.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
        }
    }

    /// Check if this is a domain error
    #[must_use]
    pub fn is_domain_error(&self) -> bool {
        self.category == ErrorCategory::Domain
    }

    /// Check if this is a pole error
    #[must_use]
    pub fn is_pole_error(&self) -> bool {
        self.category == ErrorCategory::Pole
    }

    /// The `errno` value a C math library would set for this error.
    #[must_use]
    pub const fn errno(&self) -> i32 {
        match self.category {
            // EDOM
            ErrorCategory::Domain => 33,
            // ERANGE
            ErrorCategory::Pole => 34,
        }
    }
}

/// Errors compare by category and code; the message is informational.
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.category == other.category && self.code == other.code
    }
}

impl Eq for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}][E{:04X}] {}", self.category, self.code, self.message)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        assert!(Error::SQRT_NEGATIVE.is_domain_error());
        assert!(!Error::SQRT_NEGATIVE.is_pole_error());
        assert!(Error::LOG_ZERO.is_pole_error());
        assert_eq!(Error::LOG_NEGATIVE.code, codes::LOG_NEGATIVE);
    }

    #[test]
    fn test_errno_mapping() {
        assert_eq!(Error::SQRT_NEGATIVE.errno(), 33);
        assert_eq!(Error::LOG_ZERO.errno(), 34);
    }

    #[test]
    fn test_equality_ignores_message() {
        let a = Error::new(ErrorCategory::Domain, codes::FMOD_INVALID, "a");
        let b = Error::new(ErrorCategory::Domain, codes::FMOD_INVALID, "b");
        let c = Error::new(ErrorCategory::Pole, codes::FMOD_INVALID, "a");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
