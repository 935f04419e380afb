// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Everything behind the `safe_input_demo` binary, kept in the library so it can be
//! tested with the mock input device.

// Attach sources.
pub mod clap_config;
pub mod run_demo;

// Re-export.
pub use clap_config::*;
pub use run_demo::*;
