// crates/flag-enum/tests/support/mod.rs
// ============================================================================
// Module: Test Support
// Description: Shared result helpers for flag enumeration integration tests.
// ============================================================================
//! ## Overview
//! Result-based assertion helpers so tests report failures without panicking.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    dead_code,
    reason = "Test-only helpers; not every test binary uses every helper."
)]

use std::error::Error;
use std::fmt;

// ========================================================================
// Test Result Helpers
// ========================================================================

/// Standard result type used across flag enumeration integration tests.
pub type TestResult<T = ()> = Result<T, Box<dyn Error>>;

/// Assertion failure raised by [`ensure`].
#[derive(Debug)]
struct AssertionFailed {
    /// Human-readable failure message.
    message: String,
}

impl fmt::Display for AssertionFailed {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl Error for AssertionFailed {}

/// Returns an error when a test condition fails.
///
/// # Errors
/// Returns an `AssertionFailed` when the condition is false.
pub fn ensure(condition: bool, message: impl Into<String>) -> TestResult {
    if condition {
        Ok(())
    } else {
        Err(Box::new(AssertionFailed {
            message: message.into(),
        }))
    }
}

/// Returns an error when two values differ, naming both in the message.
///
/// # Errors
/// Returns an `AssertionFailed` when `actual != expected`.
pub fn ensure_eq<T>(actual: &T, expected: &T, context: &str) -> TestResult
where
    T: PartialEq + fmt::Debug,
{
    ensure(actual == expected, format!("{context}: expected {expected:?}, got {actual:?}"))
}
