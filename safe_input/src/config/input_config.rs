// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::{InputConfigError, RetryPolicy};

/// Size of the line buffer used by numeric and string accessors.
pub const DEFAULT_LINE_BUFFER_SIZE: usize = 128;
/// Size of the buffer used by character (and boolean) accessors.
pub const DEFAULT_CHAR_BUFFER_SIZE: usize = 4;

/// Knobs for [`crate::SafeInput`].
///
/// Buffer sizes include one byte that is reserved for a terminator, so a line buffer
/// of `128` accepts numeric lines of at most `126` bytes (a `127` byte line fills the
/// `127` byte window and overflows). The counted string accessor needs no terminator
/// and uses the whole buffer.
///
/// Can be loaded from JSON, any missing field takes its default:
/// ```json
/// { "line_buffer_size": 64, "retry_policy": { "max_attempts": 3 } }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    line_buffer_size: usize,
    char_buffer_size: usize,
    retry_policy: RetryPolicy,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            line_buffer_size: DEFAULT_LINE_BUFFER_SIZE,
            char_buffer_size: DEFAULT_CHAR_BUFFER_SIZE,
            retry_policy: RetryPolicy::default(),
        }
    }
}

impl InputConfig {
    /// # Errors
    ///
    /// Returns [`InputConfigError::Malformed`] if `json` doesn't deserialize, or
    /// [`InputConfigError::BufferTooSmall`] if a buffer size is below `2`.
    pub fn try_from_json_str(json: &str) -> Result<Self, InputConfigError> {
        let it: Self = serde_json::from_str(json)?;
        it.validate()
    }

    /// # Errors
    ///
    /// Returns [`InputConfigError::BufferTooSmall`] if `size` is below `2`.
    pub fn with_line_buffer_size(self, size: usize) -> Result<Self, InputConfigError> {
        Self {
            line_buffer_size: size,
            ..self
        }
        .validate()
    }

    /// # Errors
    ///
    /// Returns [`InputConfigError::BufferTooSmall`] if `size` is below `2`.
    pub fn with_char_buffer_size(self, size: usize) -> Result<Self, InputConfigError> {
        Self {
            char_buffer_size: size,
            ..self
        }
        .validate()
    }

    #[must_use]
    pub fn with_retry_policy(self, retry_policy: RetryPolicy) -> Self {
        Self {
            retry_policy,
            ..self
        }
    }

    fn validate(self) -> Result<Self, InputConfigError> {
        for (name, size) in [
            ("line_buffer_size", self.line_buffer_size),
            ("char_buffer_size", self.char_buffer_size),
        ] {
            if size < 2 {
                return Err(InputConfigError::BufferTooSmall { name, size });
            }
        }
        Ok(self)
    }
}

impl InputConfig {
    #[must_use]
    pub fn retry_policy(&self) -> RetryPolicy { self.retry_policy }

    #[must_use]
    pub fn line_buffer_size(&self) -> usize { self.line_buffer_size }

    #[must_use]
    pub fn char_buffer_size(&self) -> usize { self.char_buffer_size }

    /// Window for accessors that reserve a terminator byte (numbers, terminated strings).
    #[must_use]
    pub fn terminated_line_capacity(&self) -> NonZeroUsize {
        reserve_terminator(self.line_buffer_size)
    }

    /// Window for the counted string accessor, which stores no terminator.
    #[must_use]
    pub fn counted_line_capacity(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.line_buffer_size).unwrap_or(NonZeroUsize::MIN)
    }

    /// Window for character accessors.
    #[must_use]
    pub fn char_capacity(&self) -> NonZeroUsize { reserve_terminator(self.char_buffer_size) }
}

/// `validate()` guarantees `size >= 2`, the fallback is never taken.
fn reserve_terminator(size: usize) -> NonZeroUsize {
    NonZeroUsize::new(size.saturating_sub(1)).unwrap_or(NonZeroUsize::MIN)
}
