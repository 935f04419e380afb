// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DiagnosticSink, InputConfig, InputDevice};

/// Validated, line oriented input. Holds the input stream, the error channel and the
/// configuration that every typed getter shares.
///
/// Each getter blocks until a whole line (or end of stream) is available, and keeps
/// re-prompting on malformed input, so it is meant for a single logical reader, like a
/// user at an interactive terminal.
///
/// ```no_run
/// use r3bl_safe_input::{InputError, SafeInput};
///
/// let mut input = SafeInput::new_stdin();
/// match input.read_i32() {
///     Ok(age) => println!("age: {age}"),
///     Err(InputError::EndOfStream) => println!("no more input"),
///     Err(other) => println!("{other}"),
/// }
/// ```
#[derive(Debug)]
pub struct SafeInput {
    pub input_device: InputDevice,
    pub sink: DiagnosticSink,
    pub config: InputConfig,
}

impl SafeInput {
    /// Reads from process `stdin`, reports to process `stderr`, default config.
    #[must_use]
    pub fn new_stdin() -> Self { Self::new(InputDevice::new_stdin(), DiagnosticSink::new_stderr()) }

    #[must_use]
    pub fn new(input_device: InputDevice, sink: DiagnosticSink) -> Self {
        Self {
            input_device,
            sink,
            config: InputConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(self, config: InputConfig) -> Self { Self { config, ..self } }
}
