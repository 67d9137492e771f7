// elmath - elmath
// Module: Traits
//
// Copyright (c) 2025 The elmath Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Common traits used within the elmath crate.

use crate::classify::approx_eq;

/// Tolerance-based comparison as a method, so that branch conditions read
/// `x.approx_eq(1.0)` instead of nesting free-function calls.
pub trait ApproxEq: Sized {
    /// `true` iff `self` and `other` differ by less than [`EPS`](crate::consts::EPS).
    fn approx_eq(self, other: Self) -> bool;

    /// `true` iff `self` is within [`EPS`](crate::consts::EPS) of zero.
    fn approx_zero(self) -> bool;
}

impl ApproxEq for f64 {
    #[inline]
    fn approx_eq(self, other: Self) -> bool {
        approx_eq(self, other)
    }

    #[inline]
    fn approx_zero(self) -> bool {
        approx_eq(self, 0.0)
    }
}
