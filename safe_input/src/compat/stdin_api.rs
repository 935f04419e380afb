// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Free functions over one process-wide [`LegacyInput`] that reads `stdin` and reports
//! to `stderr`.

use std::{ffi::{c_int, c_long, c_longlong, c_uint, c_ulong, c_ulonglong},
          sync::{LazyLock, PoisonError}};

use crate::{AllowSet, CountedString, LegacyInput, StdMutex, TerminatedString};

static STDIN_INPUT: LazyLock<StdMutex<LegacyInput>> =
    LazyLock::new(|| StdMutex::new(LegacyInput::new_stdin()));

/// Run `f` with exclusive access to the shared stdin reader. A panic in an earlier
/// caller does not poison it, the reader holds no state between calls.
pub fn with_stdin_input<T>(f: impl FnOnce(&mut LegacyInput) -> T) -> T {
    let mut guard = STDIN_INPUT.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut *guard)
}

pub fn get_int() -> c_int { with_stdin_input(LegacyInput::get_int) }

pub fn get_uint() -> c_uint { with_stdin_input(LegacyInput::get_uint) }

pub fn get_long() -> c_long { with_stdin_input(LegacyInput::get_long) }

pub fn get_ulong() -> c_ulong { with_stdin_input(LegacyInput::get_ulong) }

pub fn get_long_long() -> c_longlong { with_stdin_input(LegacyInput::get_long_long) }

pub fn get_ulong_long() -> c_ulonglong { with_stdin_input(LegacyInput::get_ulong_long) }

pub fn get_float() -> f32 { with_stdin_input(LegacyInput::get_float) }

pub fn get_double() -> f64 { with_stdin_input(LegacyInput::get_double) }

pub fn get_char() -> c_int { with_stdin_input(LegacyInput::get_char) }

pub fn get_char_filtered(allowed: &AllowSet) -> c_int {
    with_stdin_input(|it| it.get_char_filtered(allowed))
}

pub fn get_c_string() -> Option<TerminatedString> {
    with_stdin_input(LegacyInput::get_c_string)
}

pub fn get_string() -> Option<CountedString> { with_stdin_input(LegacyInput::get_string) }

pub fn get_bool() -> bool { with_stdin_input(LegacyInput::get_bool) }
