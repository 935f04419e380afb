// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallvec::SmallVec;

use crate::InputConfigError;

/// Storage for [`AllowSet`]. Most sets are a handful of menu keys, these stay inline.
pub type AllowSetStorage = SmallVec<[u8; 16]>;

/// The non-empty set of bytes that [`crate::SafeInput::read_char_filtered()`] accepts.
/// Duplicates are dropped, the input order is kept for the diagnostic text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowSet {
    bytes: AllowSetStorage,
}

impl AllowSet {
    /// # Errors
    ///
    /// Returns [`InputConfigError::EmptyAllowSet`] if `allowed` has no bytes.
    pub fn try_new(allowed: impl AsRef<[u8]>) -> Result<Self, InputConfigError> {
        let mut bytes = AllowSetStorage::new();
        for &byte in allowed.as_ref() {
            if !bytes.contains(&byte) {
                bytes.push(byte);
            }
        }

        if bytes.is_empty() {
            return Err(InputConfigError::EmptyAllowSet);
        }

        Ok(Self { bytes })
    }

    #[must_use]
    pub fn contains(&self, byte: u8) -> bool { self.bytes.contains(&byte) }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] { &self.bytes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_empty_set_is_rejected() {
        assert!(matches!(
            AllowSet::try_new(""),
            Err(InputConfigError::EmptyAllowSet)
        ));
        assert!(AllowSet::try_new(Vec::<u8>::new()).is_err());
    }

    #[test]
    fn test_duplicates_are_dropped_in_order() {
        let set = AllowSet::try_new("abcab").unwrap();
        assert_eq2!(set.as_bytes(), b"abc");
        assert!(set.contains(b'b'));
        assert!(!set.contains(b'd'));
    }
}
