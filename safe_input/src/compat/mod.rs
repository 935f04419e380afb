// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Sentinel-returning getters for callers ported from code that expects a plain value
//! back and checks it against a "no value" marker. New code should use
//! [`crate::SafeInput`] directly and match on [`crate::InputResult`].
//!
//! | Type                 | Returned when no value is available |
//! | :------------------- | :---------------------------------- |
//! | signed integers      | `MIN`                               |
//! | unsigned integers    | `MAX`                               |
//! | floats               | `NAN`                               |
//! | `get_char`           | [`EOF`]                             |
//! | strings              | [`None`]                            |
//! | `get_bool`           | `false`                             |
//!
//! The numeric sentinels are also valid inputs, so a caller that needs to tell them
//! apart must use the typed API.

// Attach sources.
pub mod legacy_input;
pub mod sentinel;
pub mod stdin_api;

// Re-export.
pub use legacy_input::*;
pub use sentinel::*;
pub use stdin_api::*;
