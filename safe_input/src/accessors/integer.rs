// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{ffi::{c_long, c_longlong, c_ulong, c_ulonglong},
          num::{IntErrorKind, ParseIntError}};

use crate::{ConversionError, InputKind, InputResult, Rejection, SafeInput,
            numeric_text::{classify_unparsable, trim_leading_c_space}};

/// An integer type that [`SafeInput::read_integer()`] can produce.
///
/// Text is parsed into a 128 bit intermediate of the same signedness first, and then
/// narrowed with [`TryFrom`], so the range check is exact for every target width.
pub trait IntegerTarget: Sized + Copy {
    const KIND: InputKind;
    const SIGNED: bool;

    /// `text` has already had its leading whitespace removed.
    ///
    /// # Errors
    ///
    /// Returns the [`ConversionError`] that describes why `text` is not a `Self`.
    fn from_decimal(text: &str) -> Result<Self, ConversionError>;
}

macro_rules! impl_integer_target {
    ($wide:ty, $signed:expr; $($target:ty => $kind:ident),+ $(,)?) => {
        $(
            impl IntegerTarget for $target {
                const KIND: InputKind = InputKind::$kind;
                const SIGNED: bool = $signed;

                fn from_decimal(text: &str) -> Result<Self, ConversionError> {
                    let wide = text
                        .parse::<$wide>()
                        .map_err(|error| map_parse_int_error(&error, text))?;
                    Self::try_from(wide).map_err(|_| ConversionError::OutOfRange)
                }
            }
        )+
    };
}

impl_integer_target!(i128, true; i32 => I32, i64 => I64, i128 => I128);
impl_integer_target!(u128, false; u32 => U32, u64 => U64, u128 => U128);

fn map_parse_int_error(error: &ParseIntError, text: &str) -> ConversionError {
    match error.kind() {
        IntErrorKind::Empty => ConversionError::Empty,
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ConversionError::OutOfRange,
        _ => classify_unparsable(text.as_bytes(), false),
    }
}

/// Convert one line to an integer: optional leading whitespace, optional sign, decimal
/// digits, and nothing else.
///
/// # Errors
///
/// Returns the [`ConversionError`] that is reported to the user.
pub fn parse_integer<T: IntegerTarget>(line: &[u8]) -> Result<T, ConversionError> {
    let trimmed = trim_leading_c_space(line);

    if trimmed.is_empty() {
        return Err(ConversionError::Empty);
    }
    if !T::SIGNED && trimmed.first() == Some(&b'-') {
        return Err(ConversionError::Negative);
    }

    let text = std::str::from_utf8(trimmed).map_err(|_| classify_unparsable(trimmed, false))?;
    T::from_decimal(text)
}

impl SafeInput {
    /// Read integers until one parses and fits in `T`.
    ///
    /// # Errors
    ///
    /// See [`crate::InputError`].
    pub fn read_integer<T: IntegerTarget>(&mut self) -> InputResult<T> {
        let capacity = self.config.terminated_line_capacity();
        self.retry_loop(T::KIND, capacity, |line| {
            parse_integer::<T>(line).map_err(Rejection::from)
        })
    }

    /// # Errors
    ///
    /// See [`crate::InputError`].
    pub fn read_i32(&mut self) -> InputResult<i32> { self.read_integer() }

    /// # Errors
    ///
    /// See [`crate::InputError`].
    pub fn read_u32(&mut self) -> InputResult<u32> { self.read_integer() }

    /// # Errors
    ///
    /// See [`crate::InputError`].
    pub fn read_i64(&mut self) -> InputResult<i64> { self.read_integer() }

    /// # Errors
    ///
    /// See [`crate::InputError`].
    pub fn read_u64(&mut self) -> InputResult<u64> { self.read_integer() }

    /// # Errors
    ///
    /// See [`crate::InputError`].
    pub fn read_i128(&mut self) -> InputResult<i128> { self.read_integer() }

    /// # Errors
    ///
    /// See [`crate::InputError`].
    pub fn read_u128(&mut self) -> InputResult<u128> { self.read_integer() }

    /// Platform `long`. 64 bits on most Unix targets, 32 bits on Windows.
    ///
    /// # Errors
    ///
    /// See [`crate::InputError`].
    pub fn read_long(&mut self) -> InputResult<c_long> { self.read_integer() }

    /// # Errors
    ///
    /// See [`crate::InputError`].
    pub fn read_ulong(&mut self) -> InputResult<c_ulong> { self.read_integer() }

    /// # Errors
    ///
    /// See [`crate::InputError`].
    pub fn read_long_long(&mut self) -> InputResult<c_longlong> { self.read_integer() }

    /// # Errors
    ///
    /// See [`crate::InputError`].
    pub fn read_ulong_long(&mut self) -> InputResult<c_ulonglong> { self.read_integer() }
}
