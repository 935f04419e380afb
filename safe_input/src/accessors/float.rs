// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::str::FromStr;

use crate::{ConversionError, InputKind, InputResult, Rejection, SafeInput,
            numeric_text::{classify_unparsable, has_ascii_digit,
                           mantissa_has_nonzero_digit, trim_leading_c_space}};

/// A floating point type that [`SafeInput::read_float()`] can produce.
pub trait FloatTarget: FromStr + Copy + PartialEq {
    const KIND: InputKind;
    const ZERO: Self;

    fn is_finite(self) -> bool;

    fn is_subnormal(self) -> bool;
}

impl FloatTarget for f32 {
    const KIND: InputKind = InputKind::F32;
    const ZERO: Self = 0.0;

    fn is_finite(self) -> bool { f32::is_finite(self) }

    fn is_subnormal(self) -> bool { f32::is_subnormal(self) }
}

impl FloatTarget for f64 {
    const KIND: InputKind = InputKind::F64;
    const ZERO: Self = 0.0;

    fn is_finite(self) -> bool { f64::is_finite(self) }

    fn is_subnormal(self) -> bool { f64::is_subnormal(self) }
}

/// Convert one line to a finite float.
///
/// Decimal and exponent forms are accepted (`1.5`, `-.5`, `2e10`). Words like `inf` and
/// `nan` parse, but are rejected as not finite. A value too large for `T` is out of
/// range, and so is a non-zero value too small for `T`: one that would silently become
/// zero, or one that only fits as a subnormal with reduced precision.
///
/// # Errors
///
/// Returns the [`ConversionError`] that is reported to the user.
pub fn parse_float<T: FloatTarget>(line: &[u8]) -> Result<T, ConversionError> {
    let trimmed = trim_leading_c_space(line);

    if trimmed.is_empty() {
        return Err(ConversionError::Empty);
    }

    let value = std::str::from_utf8(trimmed)
        .ok()
        .and_then(|text| text.parse::<T>().ok())
        .ok_or_else(|| classify_unparsable(trimmed, true))?;

    if !value.is_finite() {
        return Err(if has_ascii_digit(trimmed) {
            ConversionError::OutOfRange
        } else {
            ConversionError::NotFinite
        });
    }

    if value.is_subnormal() || (value == T::ZERO && mantissa_has_nonzero_digit(trimmed)) {
        return Err(ConversionError::OutOfRange);
    }

    Ok(value)
}

impl SafeInput {
    /// Read floats until one parses and is finite.
    ///
    /// # Errors
    ///
    /// See [`crate::InputError`].
    pub fn read_float<T: FloatTarget>(&mut self) -> InputResult<T> {
        let capacity = self.config.terminated_line_capacity();
        self.retry_loop(T::KIND, capacity, |line| {
            parse_float::<T>(line).map_err(Rejection::from)
        })
    }

    /// # Errors
    ///
    /// See [`crate::InputError`].
    pub fn read_f32(&mut self) -> InputResult<f32> { self.read_float() }

    /// # Errors
    ///
    /// See [`crate::InputError`].
    pub fn read_f64(&mut self) -> InputResult<f64> { self.read_float() }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{DiagnosticSink, DiagnosticSinkExt as _, InputDevice, InputDeviceExtMock as _,
                InputError, assert_eq2, ui_str};

    #[test_case(b"1.5", Ok(1.5))]
    #[test_case(b" -0.25", Ok(-0.25))]
    #[test_case(b".5", Ok(0.5))]
    #[test_case(b"5.", Ok(5.0))]
    #[test_case(b"2e3", Ok(2000.0))]
    #[test_case(b"0", Ok(0.0))]
    #[test_case(b"0.000e5", Ok(0.0))]
    #[test_case(b"1e308", Ok(1e308))]
    #[test_case(b"1e309", Err(ConversionError::OutOfRange))]
    #[test_case(b"1e-400", Err(ConversionError::OutOfRange))]
    #[test_case(b"1e-310", Err(ConversionError::OutOfRange))]
    #[test_case(b"2.2250738585072014e-308", Ok(f64::MIN_POSITIVE))]
    #[test_case(b"inf", Err(ConversionError::NotFinite))]
    #[test_case(b"-Infinity", Err(ConversionError::NotFinite))]
    #[test_case(b"nan", Err(ConversionError::NotFinite))]
    #[test_case(b"", Err(ConversionError::Empty))]
    #[test_case(b"abc", Err(ConversionError::NotANumber))]
    #[test_case(b".", Err(ConversionError::NotANumber))]
    #[test_case(b"1.5x", Err(ConversionError::TrailingCharacters))]
    #[test_case(b"1.5 ", Err(ConversionError::TrailingCharacters))]
    #[test_case(b"0x1p3", Err(ConversionError::TrailingCharacters))]
    fn test_parse_f64(line: &[u8], expected: Result<f64, ConversionError>) {
        assert_eq2!(parse_float::<f64>(line), expected);
    }

    #[test_case(b"3.5", Ok(3.5))]
    #[test_case(b"1e39", Err(ConversionError::OutOfRange))]
    #[test_case(b"1e-50", Err(ConversionError::OutOfRange))]
    #[test_case(b"1e-40", Err(ConversionError::OutOfRange) ; "positive subnormal")]
    #[test_case(b"-1e-40", Err(ConversionError::OutOfRange) ; "negative subnormal")]
    fn test_parse_f32(line: &[u8], expected: Result<f32, ConversionError>) {
        assert_eq2!(parse_float::<f32>(line), expected);
    }

    #[test]
    fn test_read_f64_retries_until_finite() {
        let (sink, sink_mock) = DiagnosticSink::new_mock();
        let mut input = SafeInput::new(InputDevice::new_mock("nan\nxyz\n2.5\n"), sink);
        assert_eq2!(input.read_f64(), Ok(2.5));
        assert_eq2!(input.read_f32(), Err(InputError::EndOfStream));
        assert_eq2!(
            sink_mock.lines(),
            vec![ui_str::NOT_FINITE_MSG, ui_str::NOT_A_NUMBER_MSG]
        );
    }
}
