// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{AllowSet, ConversionError, InputKind, InputResult, Rejection, SafeInput};

/// An empty line is the newline the user typed, anything longer than one byte is
/// rejected.
pub(crate) fn single_byte_or_newline(line: &[u8]) -> Result<u8, ConversionError> {
    match line {
        [] => Ok(b'\n'),
        [byte] => Ok(*byte),
        _ => Err(ConversionError::NotSingleCharacter),
    }
}

impl SafeInput {
    /// Read a line that holds a single byte. Pressing enter on an empty line returns
    /// `b'\n'`.
    ///
    /// # Errors
    ///
    /// See [`crate::InputError`].
    pub fn read_char(&mut self) -> InputResult<u8> {
        let capacity = self.config.char_capacity();
        self.retry_loop(InputKind::Char, capacity, |line| {
            single_byte_or_newline(line).map_err(Rejection::from)
        })
    }

    /// Read a line that holds exactly one byte from `allowed`. Unlike
    /// [`Self::read_char()`], an empty line is rejected here. A line with the wrong
    /// number of bytes is reported as such, a single byte outside `allowed` lists the
    /// allowed bytes.
    ///
    /// # Errors
    ///
    /// See [`crate::InputError`].
    pub fn read_char_filtered(&mut self, allowed: &AllowSet) -> InputResult<u8> {
        let capacity = self.config.char_capacity();
        self.retry_loop(InputKind::CharFiltered, capacity, |line| match line {
            [byte] if allowed.contains(*byte) => Ok(*byte),
            [_] => Err(ConversionError::NotInAllowSet {
                allowed: allowed.as_bytes().to_vec(),
            }
            .into()),
            [] | [_, _, ..] => Err(ConversionError::NotSingleCharacter.into()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DiagnosticSink, DiagnosticSinkExt as _, InputDevice, InputDeviceExtMock as _,
                InputError, SinkMock, assert_eq2, ui_str};

    fn safe_input(script: &str) -> (SafeInput, SinkMock) {
        let (sink, sink_mock) = DiagnosticSink::new_mock();
        (SafeInput::new(InputDevice::new_mock(script), sink), sink_mock)
    }

    #[test]
    fn test_read_char() {
        let (mut input, sink_mock) = safe_input("a\n\nab\nb\n");
        assert_eq2!(input.read_char(), Ok(b'a'));
        assert_eq2!(input.read_char(), Ok(b'\n'));
        assert_eq2!(input.read_char(), Ok(b'b'));
        assert_eq2!(input.read_char(), Err(InputError::EndOfStream));
        assert_eq2!(sink_mock.lines(), vec![ui_str::NOT_SINGLE_CHAR_MSG]);
    }

    #[test]
    fn test_read_char_three_bytes_overflows_default_window() {
        let (mut input, sink_mock) = safe_input("abc\nz\n");
        assert_eq2!(input.read_char(), Ok(b'z'));
        assert_eq2!(sink_mock.lines(), vec![ui_str::INPUT_EXCEEDS_BUFFER_MSG]);
    }

    #[test]
    fn test_read_char_filtered() {
        let allowed = AllowSet::try_new("abc").unwrap();
        let (mut input, sink_mock) = safe_input("x\n\nb\n");
        assert_eq2!(input.read_char_filtered(&allowed), Ok(b'b'));
        assert_eq2!(
            sink_mock.lines(),
            vec!["Invalid input. Allowed: abc", ui_str::NOT_SINGLE_CHAR_MSG]
        );
    }

    #[test]
    fn test_read_char_filtered_wrong_length_is_not_a_set_miss() {
        let allowed = AllowSet::try_new("abc").unwrap();
        let (mut input, sink_mock) = safe_input("ab\n\nb\n");
        assert_eq2!(input.read_char_filtered(&allowed), Ok(b'b'));
        assert_eq2!(
            sink_mock.lines(),
            vec![ui_str::NOT_SINGLE_CHAR_MSG, ui_str::NOT_SINGLE_CHAR_MSG]
        );
    }

    #[test]
    fn test_read_char_filtered_end_of_stream() {
        let allowed = AllowSet::try_new("q").unwrap();
        let (mut input, _) = safe_input("z");
        assert_eq2!(
            input.read_char_filtered(&allowed),
            Err(InputError::EndOfStream)
        );
    }
}
