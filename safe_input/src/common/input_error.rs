// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::num::NonZeroU32;

/// Result type for every typed accessor on [`crate::SafeInput`]. The `Ok` side holds
/// the converted value. The `Err` side holds the reason that no value is available.
/// Bad-but-present input never shows up here, it is retried inside the accessor.
pub type InputResult<T> = Result<T, InputError>;

/// Terminal conditions that end an accessor call without a value.
///
/// | Variant              | Cause                                              |
/// | :------------------- | :------------------------------------------------- |
/// | [`EndOfStream`]      | The input stream is exhausted, nothing to retry    |
/// | [`AllocationFailed`] | The owned string result could not be allocated     |
/// | [`RetriesExhausted`] | A bounded [`crate::RetryPolicy`] ran out of tries  |
///
/// [`EndOfStream`]: Self::EndOfStream
/// [`AllocationFailed`]: Self::AllocationFailed
/// [`RetriesExhausted`]: Self::RetriesExhausted
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum InputError {
    #[error("End of input stream")]
    #[diagnostic(code(r3bl_safe_input::end_of_stream))]
    EndOfStream,

    #[error("Failed to allocate {requested} bytes for the input line")]
    #[diagnostic(code(r3bl_safe_input::allocation_failed))]
    AllocationFailed { requested: usize },

    #[error("Gave up after {attempts} invalid attempts")]
    #[diagnostic(
        code(r3bl_safe_input::retries_exhausted),
        help("Raise or remove the limit set by `RetryPolicy::MaxAttempts`")
    )]
    RetriesExhausted { attempts: NonZeroU32 },
}

/// Caller bugs and bad configuration. These are detected once, when a value is
/// constructed, and never from inside an input loop.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum InputConfigError {
    #[error("No allowed characters specified")]
    #[diagnostic(
        code(r3bl_safe_input::empty_allow_set),
        help("Pass at least one byte to `AllowSet::try_new()`")
    )]
    EmptyAllowSet,

    #[error("Buffer `{name}` has size {size}, it must be at least 2")]
    #[diagnostic(
        code(r3bl_safe_input::buffer_too_small),
        help("One byte of every buffer is reserved for a terminator")
    )]
    BufferTooSmall { name: &'static str, size: usize },

    #[error("Malformed input configuration")]
    #[diagnostic(code(r3bl_safe_input::malformed_config))]
    Malformed(#[from] serde_json::Error),
}
