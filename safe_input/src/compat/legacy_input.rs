// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ffi::{c_int, c_long, c_longlong, c_uint, c_ulong, c_ulonglong};

use crate::{AllowSet, CountedString, EOF, InputError, InputResultExt, SafeInput,
            TerminatedString, ui_str};

/// Parameterless getters over a [`SafeInput`], each returning a plain value. See
/// [`crate::compat`] for what comes back when there is no value.
#[derive(Debug)]
pub struct LegacyInput {
    pub safe_input: SafeInput,
}

impl Default for LegacyInput {
    fn default() -> Self { Self::new_stdin() }
}

impl LegacyInput {
    #[must_use]
    pub fn new_stdin() -> Self { Self::new(SafeInput::new_stdin()) }

    #[must_use]
    pub fn new(safe_input: SafeInput) -> Self { Self { safe_input } }
}

impl LegacyInput {
    pub fn get_int(&mut self) -> c_int { self.safe_input.read_integer().or_sentinel() }

    pub fn get_uint(&mut self) -> c_uint { self.safe_input.read_integer().or_sentinel() }

    pub fn get_long(&mut self) -> c_long { self.safe_input.read_long().or_sentinel() }

    pub fn get_ulong(&mut self) -> c_ulong { self.safe_input.read_ulong().or_sentinel() }

    pub fn get_long_long(&mut self) -> c_longlong {
        self.safe_input.read_long_long().or_sentinel()
    }

    pub fn get_ulong_long(&mut self) -> c_ulonglong {
        self.safe_input.read_ulong_long().or_sentinel()
    }

    pub fn get_float(&mut self) -> f32 { self.safe_input.read_f32().or_sentinel() }

    pub fn get_double(&mut self) -> f64 { self.safe_input.read_f64().or_sentinel() }

    /// The byte read, or [`EOF`].
    pub fn get_char(&mut self) -> c_int {
        self.safe_input.read_char().map_or(EOF, c_int::from)
    }

    /// The byte read, or [`EOF`].
    pub fn get_char_filtered(&mut self, allowed: &AllowSet) -> c_int {
        self.safe_input
            .read_char_filtered(allowed)
            .map_or(EOF, c_int::from)
    }

    pub fn get_c_string(&mut self) -> Option<TerminatedString> {
        self.safe_input.read_terminated_string().ok()
    }

    pub fn get_string(&mut self) -> Option<CountedString> {
        self.safe_input.read_counted_string().ok()
    }

    /// End of stream can't be told apart from "no", so it is reported on the sink.
    pub fn get_bool(&mut self) -> bool {
        match self.safe_input.read_bool() {
            Ok(value) => value,
            Err(InputError::EndOfStream) => {
                self.safe_input.sink.report(ui_str::EOF_BOOL_DEFAULT_MSG);
                false
            }
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DiagnosticSink, DiagnosticSinkExt as _, InputDevice, InputDeviceExtMock as _,
                SinkMock, assert_eq2};

    fn legacy_input(script: &str) -> (LegacyInput, SinkMock) {
        let (sink, sink_mock) = DiagnosticSink::new_mock();
        let safe_input = SafeInput::new(InputDevice::new_mock(script), sink);
        (LegacyInput::new(safe_input), sink_mock)
    }

    #[test]
    fn test_numeric_getters_and_sentinels() {
        let (mut input, _) = legacy_input("42\n7\n-1\n2.5\n");
        assert_eq2!(input.get_int(), 42);
        assert_eq2!(input.get_uint(), 7);
        assert_eq2!(input.get_long_long(), -1);
        assert_eq2!(input.get_double(), 2.5);

        assert_eq2!(input.get_int(), c_int::MIN);
        assert_eq2!(input.get_uint(), c_uint::MAX);
        assert_eq2!(input.get_long(), c_long::MIN);
        assert_eq2!(input.get_ulong(), c_ulong::MAX);
        assert_eq2!(input.get_ulong_long(), c_ulonglong::MAX);
        assert!(input.get_float().is_nan());
    }

    #[test]
    fn test_char_getters() {
        let allowed = AllowSet::try_new("xyz").unwrap();
        let (mut input, _) = legacy_input("a\nq\ny\n");
        assert_eq2!(input.get_char(), c_int::from(b'a'));
        assert_eq2!(input.get_char_filtered(&allowed), c_int::from(b'y'));
        assert_eq2!(input.get_char(), EOF);
        assert_eq2!(input.get_char_filtered(&allowed), EOF);
    }

    #[test]
    fn test_string_getters() {
        let (mut input, _) = legacy_input("hi\nthere\n");
        assert_eq2!(input.get_c_string().unwrap().as_bytes_with_nul(), b"hi\0");
        assert_eq2!(input.get_string().unwrap().as_bytes(), b"there");
        assert_eq2!(input.get_string(), None);
    }

    #[test]
    fn test_get_bool_end_of_stream_reports_default() {
        let (mut input, sink_mock) = legacy_input("ok\nY\n");
        assert!(input.get_bool());
        assert!(!input.get_bool());
        assert_eq2!(
            sink_mock.lines(),
            vec![
                ui_str::NOT_SINGLE_CHAR_MSG,
                ui_str::EOF_BOOL_DEFAULT_MSG,
            ]
        );
    }
}
