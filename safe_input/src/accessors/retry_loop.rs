// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::num::NonZeroUsize;

use crate::{AttemptCounter, ByteWindow, ConversionError, InputError, InputResult,
            ReadOutcome, SafeInput, ui_str};

/// Which getter is running. Only used to label log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
pub enum InputKind {
    I32,
    U32,
    I64,
    U64,
    I128,
    U128,
    F32,
    F64,
    Char,
    CharFiltered,
    TerminatedString,
    CountedString,
    Bool,
}

/// Why a conversion step did not produce a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    /// Bad input. Reported to the sink, then the user is asked again.
    Invalid(ConversionError),
    /// No point in asking again. Ends the accessor call with this error.
    Abort(InputError),
}

impl From<ConversionError> for Rejection {
    fn from(error: ConversionError) -> Self { Rejection::Invalid(error) }
}

impl SafeInput {
    /// The loop that every typed getter is built from.
    ///
    /// 1. Read one line into a window of `capacity` bytes.
    /// 2. [`ReadOutcome::EndOfStream`] ends the call with [`InputError::EndOfStream`].
    /// 3. [`ReadOutcome::Overflow`] was already reported and drained by the reader, so
    ///    just ask again.
    /// 4. [`ReadOutcome::Success`] hands exactly the bytes read to `convert`. A value
    ///    ends the call. [`Rejection::Invalid`] is reported and the loop goes around
    ///    again. [`Rejection::Abort`] ends the call.
    ///
    /// Every trip around the loop counts against the configured
    /// [`crate::RetryPolicy`].
    ///
    /// # Errors
    ///
    /// See [`InputError`].
    pub fn retry_loop<T>(
        &mut self,
        kind: InputKind,
        capacity: NonZeroUsize,
        mut convert: impl FnMut(&[u8]) -> Result<T, Rejection>,
    ) -> InputResult<T> {
        let mut window = ByteWindow::new(capacity);
        let mut attempts = AttemptCounter::new(self.config.retry_policy());

        loop {
            let outcome = self.input_device.read_line(&mut window, &self.sink);

            // % is Display, ? is Debug.
            tracing::debug!(message = "read_line", kind = %kind, outcome = ?outcome);

            match outcome {
                ReadOutcome::EndOfStream => return Err(InputError::EndOfStream),
                ReadOutcome::Overflow => {}
                ReadOutcome::Success(_) => match convert(window.filled()) {
                    Ok(value) => return Ok(value),
                    Err(Rejection::Abort(error)) => {
                        if let InputError::AllocationFailed { .. } = error {
                            self.sink.report(ui_str::ALLOCATION_FAILED_MSG);
                        }
                        return Err(error);
                    }
                    Err(Rejection::Invalid(error)) => {
                        tracing::debug!(message = "Rejected input", kind = %kind, error = %error);
                        self.sink.report(&error.to_string());
                    }
                },
            }

            self.record_rejection(&mut attempts, kind)?;
        }
    }

    /// Count a rejected line. When the retry budget is spent, say so on the sink.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::RetriesExhausted`] once the budget is spent.
    pub fn record_rejection(
        &self,
        attempts: &mut AttemptCounter,
        kind: InputKind,
    ) -> InputResult<()> {
        attempts.record_rejection().inspect_err(|error| {
            tracing::warn!(message = "Giving up on input", kind = %kind, error = %error);
            self.sink.report(ui_str::RETRIES_EXHAUSTED_MSG);
        })
    }
}
