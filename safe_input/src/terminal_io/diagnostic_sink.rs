// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use crate::{SafeRawWriter, StdMutex};

/// The error channel, as an injected capability. Every diagnostic that the line reader
/// and the accessors produce goes through this, instead of straight to the process
/// `stderr`, so tests can capture them. See [`crate::DiagnosticSinkExt`] for the mock.
///
/// - It is safe to clone, all clones write to the same underlying writer.
/// - Each diagnostic is one line of ASCII text.
/// - Write failures are swallowed. Input handling never changes because the error
///   channel is broken.
#[derive(Clone)]
pub struct DiagnosticSink {
    pub resource: SafeRawWriter,
    pub is_mock: bool,
}

impl std::fmt::Debug for DiagnosticSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticSink")
            .field("is_mock", &self.is_mock)
            .finish_non_exhaustive()
    }
}

impl Default for DiagnosticSink {
    fn default() -> Self { Self::new_stderr() }
}

impl DiagnosticSink {
    #[must_use]
    pub fn new_stderr() -> Self {
        Self {
            resource: Arc::new(StdMutex::new(std::io::stderr())),
            is_mock: false,
        }
    }

    #[must_use]
    pub fn new_stdout() -> Self {
        Self {
            resource: Arc::new(StdMutex::new(std::io::stdout())),
            is_mock: false,
        }
    }
}

impl DiagnosticSink {
    /// Write `message` followed by a newline, then flush. A poisoned lock is recovered,
    /// since the writer holds no invariants that a panicking writer could break.
    pub fn report(&self, message: &str) {
        // % is Display, ? is Debug.
        tracing::debug!(message = "diagnostic", text = %message);

        let mut writer = self
            .resource
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        writeln!(writer, "{message}").ok();
        writer.flush().ok();
    }
}
