// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Result of a single [`crate::InputDevice::read_line()`] call. Exactly one of these
/// holds per call, and only [`ReadOutcome::Success`] carries a byte count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome {
    /// A whole line was read. The count excludes the newline, and may be `0` for an
    /// empty line. A final line without a trailing newline is also a success.
    Success(usize),

    /// The line did not fit in the window. The rest of the line has already been
    /// drained from the stream, so the next read starts on a fresh line.
    Overflow,

    /// The stream is exhausted and no bytes were collected.
    EndOfStream,
}

impl ReadOutcome {
    #[must_use]
    pub fn byte_count(self) -> Option<usize> {
        match self {
            ReadOutcome::Success(count) => Some(count),
            ReadOutcome::Overflow | ReadOutcome::EndOfStream => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_success_carries_a_count() {
        assert_eq!(ReadOutcome::Success(3).byte_count(), Some(3));
        assert_eq!(ReadOutcome::Overflow.byte_count(), None);
        assert_eq!(ReadOutcome::EndOfStream.byte_count(), None);
    }
}
