// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

/// Disambiguate the type of `StdMutex` from other mutex types to avoid conflicts.
pub type StdMutex<T> = std::sync::Mutex<T>;

/// Type alias for a `Send`-able diagnostic writer (stderr, stdout, mock, etc).
pub type SendRawWriter = dyn std::io::Write + Send;
/// Type alias for a `Send`-able writer wrapped in an `Arc<StdMutex>`.
pub type SafeRawWriter = Arc<StdMutex<SendRawWriter>>;
