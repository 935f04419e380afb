// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{self, BufRead, Cursor};

/// Where the bytes come from. In production this is always the process `stdin`. The
/// in-memory variant only exists so that tests can script a session; it is constructed
/// by [`crate::InputDeviceExtMock::new_mock()`].
#[derive(Debug)]
pub enum InputResource {
    Stdin(io::Stdin),
    Mock(Cursor<Vec<u8>>),
}

/// The ambient, line delimited input stream. See [`crate::InputDeviceExtMock`] for
/// testing features.
///
/// Bytes are pulled one at a time, so that a line reader can stop exactly after the
/// newline and leave the rest of the stream untouched for the next call. The stdin lock
/// is held only for the duration of one [`InputDevice::with_byte_source()`] call.
#[derive(Debug)]
pub struct InputDevice {
    pub resource: InputResource,
}

impl Default for InputDevice {
    fn default() -> Self { Self::new_stdin() }
}

impl InputDevice {
    #[must_use]
    pub fn new_stdin() -> InputDevice {
        InputDevice {
            resource: InputResource::Stdin(io::stdin()),
        }
    }

    #[must_use]
    pub fn is_mock(&self) -> bool { matches!(self.resource, InputResource::Mock(_)) }
}

impl InputDevice {
    /// Run `f` against a [`ByteSource`] for this device. For stdin the lock is taken
    /// once, here, rather than once per byte.
    pub fn with_byte_source<T>(&mut self, f: impl FnOnce(&mut ByteSource<'_>) -> T) -> T {
        match &mut self.resource {
            InputResource::Stdin(stdin) => {
                let mut lock = stdin.lock();
                f(&mut ByteSource { reader: &mut lock })
            }
            InputResource::Mock(cursor) => f(&mut ByteSource { reader: cursor }),
        }
    }
}

/// Byte-at-a-time view over a buffered reader.
#[allow(missing_debug_implementations)]
pub struct ByteSource<'a> {
    reader: &'a mut dyn BufRead,
}

impl ByteSource<'_> {
    /// Returns the next byte, or [None] once the stream is exhausted. I/O errors are
    /// reported as end of stream, except for [`io::ErrorKind::Interrupted`] which is
    /// retried.
    pub fn next_byte(&mut self) -> Option<u8> {
        loop {
            let peeked = match self.reader.fill_buf() {
                Ok(buf) => buf.first().copied(),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => {
                    // % is Display, ? is Debug.
                    tracing::warn!(
                        message = "Input stream failed, treating it as end of stream",
                        error = %err
                    );
                    None
                }
            };
            if peeked.is_some() {
                self.reader.consume(1);
            }
            return peeked;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InputDeviceExtMock as _;

    #[test]
    fn test_stdin_device_is_not_mock() {
        let device = InputDevice::new_stdin();
        assert!(!device.is_mock());
    }

    #[test]
    fn test_next_byte_until_exhausted() {
        let mut device = InputDevice::new_mock("ab");
        let bytes = device.with_byte_source(|source| {
            [source.next_byte(), source.next_byte(), source.next_byte()]
        });
        assert_eq!(bytes, [Some(b'a'), Some(b'b'), None]);
        assert!(device.is_mock());
    }

    #[test]
    fn test_byte_source_leaves_rest_of_stream_for_next_call() {
        let mut device = InputDevice::new_mock("xyz");
        let first = device.with_byte_source(|source| source.next_byte());
        let second = device.with_byte_source(|source| source.next_byte());
        assert_eq!((first, second), (Some(b'x'), Some(b'y')));
    }
}
