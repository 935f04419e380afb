// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::ui_str;

/// Why a line that was read successfully is not an acceptable value. The [`Display`]
/// text of each variant is exactly the diagnostic line that is reported before the
/// user is asked again.
///
/// [`Display`]: std::fmt::Display
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum ConversionError {
    #[error("{}", ui_str::EMPTY_INPUT_MSG)]
    #[diagnostic(code(r3bl_safe_input::conversion::empty))]
    Empty,

    #[error("{}", ui_str::NOT_A_NUMBER_MSG)]
    #[diagnostic(code(r3bl_safe_input::conversion::not_a_number))]
    NotANumber,

    #[error("{}", ui_str::TRAILING_CHARACTERS_MSG)]
    #[diagnostic(code(r3bl_safe_input::conversion::trailing_characters))]
    TrailingCharacters,

    #[error("{}", ui_str::OUT_OF_RANGE_MSG)]
    #[diagnostic(code(r3bl_safe_input::conversion::out_of_range))]
    OutOfRange,

    #[error("{}", ui_str::NOT_FINITE_MSG)]
    #[diagnostic(code(r3bl_safe_input::conversion::not_finite))]
    NotFinite,

    #[error("{}", ui_str::NEGATIVE_VALUE_MSG)]
    #[diagnostic(code(r3bl_safe_input::conversion::negative))]
    Negative,

    #[error("{}", ui_str::NOT_SINGLE_CHAR_MSG)]
    #[diagnostic(code(r3bl_safe_input::conversion::not_single_character))]
    NotSingleCharacter,

    #[error("{}", ui_str::not_in_allow_set_msg(.allowed))]
    #[diagnostic(code(r3bl_safe_input::conversion::not_in_allow_set))]
    NotInAllowSet { allowed: Vec<u8> },

    #[error("{}", ui_str::NOT_YES_OR_NO_MSG)]
    #[diagnostic(code(r3bl_safe_input::conversion::not_yes_or_no))]
    NotYesOrNo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_the_diagnostic_line() {
        assert_eq!(ConversionError::Negative.to_string(), "Value can not be negative.");
        assert_eq!(
            ConversionError::NotInAllowSet {
                allowed: b"yn".to_vec()
            }
            .to_string(),
            "Invalid input. Allowed: yn"
        );
    }
}
