// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod decl_macros;
pub mod input_error;
pub mod ui_str;

// Re-export.
pub use input_error::*;
