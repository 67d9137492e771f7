// elmath - elmath
// Module: Diagnostics Macros
//
// Copyright (c) 2025 The elmath Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Logging helpers that compile away when the `log` feature is off.

/// Report that an iterative method hit its safety cap before its stopping
/// rule fired.
macro_rules! cap_reached {
    ($function:expr, $arg:expr) => {{
        #[cfg(feature = "log")]
        log::warn!(
            target: "elmath",
            "{}({}) stopped at the iteration cap",
            $function,
            $arg
        );
    }};
}

/// Report an error recorded into an `Outcome`.
macro_rules! error_recorded {
    ($value:expr, $error:expr) => {{
        #[cfg(feature = "log")]
        log::debug!(target: "elmath", "{} (result {})", $error, $value);
    }};
}
