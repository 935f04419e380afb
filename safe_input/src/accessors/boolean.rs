// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ConversionError, InputKind, InputResult, Rejection, SafeInput,
            accessors::character::single_byte_or_newline};

impl SafeInput {
    /// Read `y`/`Y` as `true` and `n`/`N` as `false`. Anything else, an empty line
    /// included, is rejected and asked again.
    ///
    /// # Errors
    ///
    /// See [`crate::InputError`].
    pub fn read_bool(&mut self) -> InputResult<bool> {
        let capacity = self.config.char_capacity();
        self.retry_loop(InputKind::Bool, capacity, |line| {
            match single_byte_or_newline(line)? {
                b'y' | b'Y' => Ok(true),
                b'n' | b'N' => Ok(false),
                _ => Err(Rejection::from(ConversionError::NotYesOrNo)),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{DiagnosticSink, DiagnosticSinkExt as _, InputDevice, InputDeviceExtMock as _,
                InputError, assert_eq2, ui_str};

    #[test_case("y\n", true ; "lowercase yes")]
    #[test_case("Y\n", true ; "uppercase yes")]
    #[test_case("n\n", false ; "lowercase no")]
    #[test_case("N", false ; "uppercase no without newline")]
    fn test_read_bool_accepts(script: &str, expected: bool) {
        let (sink, _) = DiagnosticSink::new_mock();
        let mut input = SafeInput::new(InputDevice::new_mock(script), sink);
        assert_eq2!(input.read_bool(), Ok(expected));
    }

    #[test]
    fn test_read_bool_retries_on_garbage() {
        let (sink, sink_mock) = DiagnosticSink::new_mock();
        let mut input = SafeInput::new(InputDevice::new_mock("x\n\nyy\ny\n"), sink);
        assert_eq2!(input.read_bool(), Ok(true));
        assert_eq2!(
            sink_mock.lines(),
            vec![
                ui_str::NOT_YES_OR_NO_MSG,
                ui_str::NOT_YES_OR_NO_MSG,
                ui_str::NOT_SINGLE_CHAR_MSG,
            ]
        );
    }

    #[test]
    fn test_read_bool_end_of_stream() {
        let (sink, _) = DiagnosticSink::new_mock();
        let mut input = SafeInput::new(InputDevice::new_mock("x\n"), sink);
        assert_eq2!(input.read_bool(), Err(InputError::EndOfStream));
    }
}
