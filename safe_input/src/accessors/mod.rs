// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Typed getters. Each one is the same retry loop around
//! [`crate::InputDevice::read_line()`], see [`SafeInput::retry_loop()`], with a
//! different conversion step plugged in.

// Attach sources.
pub mod allow_set;
pub mod boolean;
pub mod character;
pub mod conversion_error;
pub mod float;
pub mod integer;
pub mod numeric_text;
pub mod owned_string;
pub mod retry_loop;
pub mod safe_input;

// Re-export.
pub use allow_set::*;
pub use conversion_error::*;
pub use float::*;
pub use integer::*;
pub use owned_string::*;
pub use retry_loop::*;
pub use safe_input::*;
