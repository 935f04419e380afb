// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::Cursor;

use crate::{InputDevice, InputResource};

/// The main constructor is [`InputDeviceExtMock::new_mock()`]. The bytes are replayed
/// exactly as given, so a script like `"4a2\n42\n"` plays the part of a user who makes a
/// typo, then corrects it. Once the bytes run out the device reports end of stream.
pub trait InputDeviceExtMock {
    fn new_mock(bytes: impl Into<Vec<u8>>) -> InputDevice;
}

impl InputDeviceExtMock for InputDevice {
    fn new_mock(bytes: impl Into<Vec<u8>>) -> InputDevice {
        InputDevice {
            resource: InputResource::Mock(Cursor::new(bytes.into())),
        }
    }
}
