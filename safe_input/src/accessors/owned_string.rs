// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{borrow::Cow, ffi::CStr};

use crate::{InputError, InputKind, InputResult, Rejection, SafeInput};

/// An owned line followed by a zero byte, ready to hand to code that expects a
/// terminated string. The content itself may contain zero bytes, in which case
/// [`Self::as_c_str()`] stops at the first one while [`Self::as_bytes()`] does not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminatedString {
    bytes_with_nul: Vec<u8>,
}

impl TerminatedString {
    /// Content without the terminator.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        let end = self.bytes_with_nul.len().saturating_sub(1);
        &self.bytes_with_nul[..end]
    }

    #[must_use]
    pub fn as_bytes_with_nul(&self) -> &[u8] { &self.bytes_with_nul }

    #[must_use]
    pub fn as_c_str(&self) -> &CStr {
        CStr::from_bytes_until_nul(&self.bytes_with_nul).unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize { self.as_bytes().len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    #[must_use]
    pub fn to_string_lossy(&self) -> Cow<'_, str> { String::from_utf8_lossy(self.as_bytes()) }

    /// The content and the terminator.
    #[must_use]
    pub fn into_bytes_with_nul(self) -> Vec<u8> { self.bytes_with_nul }
}

/// An owned line plus its exact length. No terminator is stored, embedded zero bytes
/// are ordinary content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountedString {
    bytes: Vec<u8>,
}

impl CountedString {
    #[must_use]
    pub fn len(&self) -> usize { self.bytes.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.bytes.is_empty() }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] { &self.bytes }

    #[must_use]
    pub fn to_string_lossy(&self) -> Cow<'_, str> { String::from_utf8_lossy(&self.bytes) }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> { self.bytes }
}

/// Copy `line` into a fresh buffer with room for `extra` more bytes. Running out of
/// memory is reported as [`InputError::AllocationFailed`] instead of aborting.
fn try_copy_line(line: &[u8], extra: usize) -> Result<Vec<u8>, Rejection> {
    let requested = line.len().saturating_add(extra);
    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(requested)
        .map_err(|_| Rejection::Abort(InputError::AllocationFailed { requested }))?;
    bytes.extend_from_slice(line);
    Ok(bytes)
}

impl SafeInput {
    /// Read one line into a [`TerminatedString`]. An empty line is a valid, empty
    /// result.
    ///
    /// # Errors
    ///
    /// See [`crate::InputError`].
    pub fn read_terminated_string(&mut self) -> InputResult<TerminatedString> {
        let capacity = self.config.terminated_line_capacity();
        self.retry_loop(InputKind::TerminatedString, capacity, |line| {
            let mut bytes_with_nul = try_copy_line(line, 1)?;
            bytes_with_nul.push(0);
            Ok(TerminatedString { bytes_with_nul })
        })
    }

    /// Read one line into a [`CountedString`]. This accessor has no terminator to make
    /// room for, so it accepts lines one byte longer than
    /// [`Self::read_terminated_string()`].
    ///
    /// # Errors
    ///
    /// See [`crate::InputError`].
    pub fn read_counted_string(&mut self) -> InputResult<CountedString> {
        let capacity = self.config.counted_line_capacity();
        self.retry_loop(InputKind::CountedString, capacity, |line| {
            Ok(CountedString {
                bytes: try_copy_line(line, 0)?,
            })
        })
    }
}
