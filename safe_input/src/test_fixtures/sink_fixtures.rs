// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::{Result, Write},
          sync::{Arc, PoisonError}};

use crate::{DiagnosticSink, StdMutex};

pub trait DiagnosticSinkExt {
    fn new_mock() -> (DiagnosticSink, SinkMock);
}

impl DiagnosticSinkExt for DiagnosticSink {
    fn new_mock() -> (DiagnosticSink, SinkMock) {
        let sink_mock = SinkMock::default();
        let this = DiagnosticSink {
            resource: Arc::new(StdMutex::new(sink_mock.clone())),
            is_mock: true,
        };
        (this, sink_mock)
    }
}

/// You can safely clone this struct, since it only contains an `Arc<StdMutex<Vec<u8>>>`.
/// The inner `buffer` will not be cloned, just the [Arc] will be cloned.
///
/// The main constructors are:
/// - [`SinkMock::default`]
/// - [`DiagnosticSinkExt::new_mock()`]
#[derive(Clone, Default, Debug)]
pub struct SinkMock {
    pub buffer: Arc<StdMutex<Vec<u8>>>,
}

impl SinkMock {
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<u8>> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn get_copy_of_buffer(&self) -> Vec<u8> { self.lock().clone() }

    #[must_use]
    pub fn get_copy_of_buffer_as_string(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    /// Each diagnostic that was reported, in order, without the trailing newline.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.get_copy_of_buffer_as_string()
            .lines()
            .map(ToOwned::to_owned)
            .collect()
    }
}

impl Write for SinkMock {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<()> { Ok(()) }
}
