// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! All the single line diagnostics that get written to the
//! [`crate::DiagnosticSink`]. They are plain ASCII, so they look the same on every
//! terminal and are easy to match in tests.

pub const INPUT_EXCEEDS_BUFFER_MSG: &str = "Input exceeding buffer size. Try again.";
pub const EMPTY_INPUT_MSG: &str = "Invalid input (empty line). Try again.";
pub const NOT_A_NUMBER_MSG: &str = "Invalid input (not a number). Try again.";
pub const TRAILING_CHARACTERS_MSG: &str =
    "Invalid input (unexpected trailing characters). Try again.";
pub const OUT_OF_RANGE_MSG: &str = "Invalid input (value out of range). Try again.";
pub const NOT_FINITE_MSG: &str = "Invalid input (value is not finite). Try again.";
pub const NEGATIVE_VALUE_MSG: &str = "Value can not be negative.";
pub const NOT_SINGLE_CHAR_MSG: &str = "Invalid input. Please enter a single character.";
pub const NOT_YES_OR_NO_MSG: &str = "Invalid input. Enter 'y' or 'n'.";
pub const ALLOCATION_FAILED_MSG: &str = "Memory allocation failed.";
pub const RETRIES_EXHAUSTED_MSG: &str = "Too many invalid attempts.";
pub const EOF_BOOL_DEFAULT_MSG: &str = "EOF detected. Returning false by default.";

/// `Invalid input. Allowed: abc`. Bytes that aren't printable ASCII are escaped so the
/// diagnostic stays on a single line.
#[must_use]
pub fn not_in_allow_set_msg(allowed: &[u8]) -> String {
    format!("Invalid input. Allowed: {}", allowed.escape_ascii())
}
