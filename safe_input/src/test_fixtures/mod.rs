// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
mod input_device_fixtures;
mod sink_fixtures;

// Re-export.
pub use input_device_fixtures::*;
pub use sink_fixtures::*;
