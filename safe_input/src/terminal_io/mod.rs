// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Private modules (hide internal structure).
mod diagnostic_sink;
mod input_device;
mod terminal_io_type_aliases;

// Re-exports for flat public API.
pub use diagnostic_sink::*;
pub use input_device::*;
pub use terminal_io_type_aliases::*;
