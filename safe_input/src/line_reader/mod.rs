// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The bounded read-and-drain protocol. Everything else in this crate is built on
//! [`crate::InputDevice::read_line()`].

// Attach sources.
pub mod byte_window;
pub mod read_line_impl;
pub mod read_outcome;

// Re-export.
pub use byte_window::*;
pub use read_outcome::*;
