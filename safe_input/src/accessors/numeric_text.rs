// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::ConversionError;

/// Whitespace as the "C" locale `isspace()` sees it. Unlike
/// [`u8::is_ascii_whitespace()`] this includes vertical tab.
#[must_use]
pub fn is_c_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Numbers may be preceded by whitespace, but not followed by it.
#[must_use]
pub fn trim_leading_c_space(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|&byte| !is_c_space(byte))
        .unwrap_or(bytes.len());
    &bytes[start..]
}

/// Pick the diagnostic for text that the number parser refused. If the text starts
/// like a number then the problem is whatever follows it, otherwise it is not a number
/// at all.
#[must_use]
pub fn classify_unparsable(text: &[u8], accepts_fraction: bool) -> ConversionError {
    let unsigned = match text {
        [b'+' | b'-', rest @ ..] => rest,
        _ => text,
    };
    let starts_like_number = match unsigned {
        [b'0'..=b'9', ..] => true,
        [b'.', b'0'..=b'9', ..] => accepts_fraction,
        _ => false,
    };
    if starts_like_number {
        ConversionError::TrailingCharacters
    } else {
        ConversionError::NotANumber
    }
}

#[must_use]
pub fn has_ascii_digit(text: &[u8]) -> bool { text.iter().any(u8::is_ascii_digit) }

/// True for `0.001` or `1e-999`, false for `0.0` or `0e5`. Only the mantissa (before
/// any exponent) is looked at.
#[must_use]
pub fn mantissa_has_nonzero_digit(text: &[u8]) -> bool {
    text.iter()
        .take_while(|&&byte| byte != b'e' && byte != b'E')
        .any(|byte| (b'1'..=b'9').contains(byte))
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(b"  42", b"42")]
    #[test_case(b"\t\x0b\x0c\r\n7", b"7")]
    #[test_case(b"   ", b"")]
    #[test_case(b"4 2", b"4 2")]
    fn test_trim_leading_c_space(input: &[u8], expected: &[u8]) {
        assert_eq!(trim_leading_c_space(input), expected);
    }

    #[test_case(b"4a2", false, ConversionError::TrailingCharacters)]
    #[test_case(b"-12x", false, ConversionError::TrailingCharacters)]
    #[test_case(b"abc", false, ConversionError::NotANumber)]
    #[test_case(b"+", false, ConversionError::NotANumber)]
    #[test_case(b".5", false, ConversionError::NotANumber)]
    #[test_case(b".5x", true, ConversionError::TrailingCharacters)]
    fn test_classify_unparsable(text: &[u8], fraction: bool, expected: ConversionError) {
        assert_eq!(classify_unparsable(text, fraction), expected);
    }

    #[test]
    fn test_mantissa_has_nonzero_digit() {
        assert!(mantissa_has_nonzero_digit(b"1e-999"));
        assert!(mantissa_has_nonzero_digit(b"0.0001"));
        assert!(!mantissa_has_nonzero_digit(b"0.000e5"));
        assert!(!mantissa_has_nonzero_digit(b"-0"));
    }
}
