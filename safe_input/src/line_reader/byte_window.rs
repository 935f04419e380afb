// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::num::NonZeroUsize;

use smallvec::SmallVec;

use crate::DEFAULT_LINE_BUFFER_SIZE;

/// Inline storage for a window. Windows up to the default line size never touch the
/// heap.
pub type WindowStorage = SmallVec<[u8; DEFAULT_LINE_BUFFER_SIZE]>;

/// Fixed capacity buffer that one [`crate::InputDevice::read_line()`] call fills.
///
/// The capacity is a [`NonZeroUsize`], so a zero length window can't be expressed. The
/// window never holds more than `capacity` bytes, and never appends a terminator;
/// [`ByteWindow::filled()`] is exactly the bytes that were read.
#[derive(Debug, Clone)]
pub struct ByteWindow {
    bytes: WindowStorage,
    capacity: NonZeroUsize,
}

impl ByteWindow {
    #[must_use]
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            bytes: WindowStorage::with_capacity(capacity.get()),
            capacity,
        }
    }

    #[must_use]
    pub fn capacity(&self) -> NonZeroUsize { self.capacity }

    #[must_use]
    pub fn filled(&self) -> &[u8] { &self.bytes }

    #[must_use]
    pub fn len(&self) -> usize { self.bytes.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.bytes.is_empty() }

    #[must_use]
    pub fn is_full(&self) -> bool { self.bytes.len() >= self.capacity.get() }

    pub fn clear(&mut self) { self.bytes.clear(); }

    /// Append `byte` unless the window is full. Returns whether it was stored.
    pub fn try_push(&mut self, byte: u8) -> bool {
        if self.is_full() {
            return false;
        }
        self.bytes.push(byte);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_stops_at_capacity() {
        let mut window = ByteWindow::new(NonZeroUsize::new(2).unwrap());
        assert!(window.try_push(b'a'));
        assert!(window.try_push(b'b'));
        assert!(window.is_full());
        assert!(!window.try_push(b'c'));
        assert_eq!(window.filled(), b"ab");
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut window = ByteWindow::new(NonZeroUsize::MIN);
        window.try_push(b'x');
        window.clear();
        assert!(window.is_empty());
        assert_eq!(window.capacity(), NonZeroUsize::MIN);
    }
}
