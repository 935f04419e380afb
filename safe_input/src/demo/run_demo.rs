// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::Write;

use miette::IntoDiagnostic;

use crate::{AllowSet, CLIArg, DemoKind, InputConfig, InputConfigError, InputError,
            InputResult, InputResultExt, LegacyInput, RetryPolicy, SafeInput, ok};

pub const END_OF_STREAM_LINE: &str = "<end of stream>";
pub const NO_VALUE_LINE: &str = "<no value>";

/// What to read, with the allow-set resolved up front so a bad `--allowed` fails before
/// any input is read. Only [`Plan::Filtered`] carries an allow-set, so nothing can read
/// a filtered character without one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    Int,
    Uint,
    Long,
    Ulong,
    LongLong,
    UlongLong,
    I128,
    U128,
    Float,
    Double,
    Char,
    Filtered(AllowSet),
    CString,
    String,
    Bool,
}

impl Plan {
    /// # Errors
    ///
    /// Returns [`InputConfigError::EmptyAllowSet`] for `char-filtered` without a
    /// non-empty `--allowed`.
    pub fn try_from_cli_arg(cli_arg: &CLIArg) -> Result<Self, InputConfigError> {
        Ok(match cli_arg.kind {
            DemoKind::Int => Plan::Int,
            DemoKind::Uint => Plan::Uint,
            DemoKind::Long => Plan::Long,
            DemoKind::Ulong => Plan::Ulong,
            DemoKind::LongLong => Plan::LongLong,
            DemoKind::UlongLong => Plan::UlongLong,
            DemoKind::I128 => Plan::I128,
            DemoKind::U128 => Plan::U128,
            DemoKind::Float => Plan::Float,
            DemoKind::Double => Plan::Double,
            DemoKind::Char => Plan::Char,
            DemoKind::CharFiltered => Plan::Filtered(AllowSet::try_new(
                cli_arg.allowed.as_deref().unwrap_or_default(),
            )?),
            DemoKind::CString => Plan::CString,
            DemoKind::String => Plan::String,
            DemoKind::Bool => Plan::Bool,
        })
    }
}

/// `--config` file first, then `--max-attempts` on top.
///
/// # Errors
///
/// Returns an error if the config file can't be read or is malformed.
pub fn try_load_config(cli_arg: &CLIArg) -> miette::Result<InputConfig> {
    let mut config = match &cli_arg.config {
        Some(path) => {
            let json = std::fs::read_to_string(path).into_diagnostic()?;
            InputConfig::try_from_json_str(&json)?
        }
        None => InputConfig::default(),
    };

    if let Some(max) = cli_arg.max_attempts {
        config = config.with_retry_policy(RetryPolicy::MaxAttempts(max));
    }

    // % is Display, ? is Debug.
    tracing::debug!(message = "Loaded input config", config = ?config);

    Ok(config)
}

/// Read one value (or, with `--repeat`, values until end of stream) and print each as
/// `value: ...` on `out`.
///
/// # Errors
///
/// Returns an error if the retry budget runs out, string allocation fails, or `out`
/// can't be written to.
pub fn run_typed(
    cli_arg: &CLIArg,
    input: &mut SafeInput,
    out: &mut impl Write,
) -> miette::Result<()> {
    let plan = Plan::try_from_cli_arg(cli_arg)?;

    loop {
        match read_one(&plan, input) {
            Ok(value) => writeln!(out, "value: {value}").into_diagnostic()?,
            Err(InputError::EndOfStream) => {
                writeln!(out, "{END_OF_STREAM_LINE}").into_diagnostic()?;
                return ok!();
            }
            Err(error) => return Err(error.into()),
        }

        if !cli_arg.repeat {
            return ok!();
        }
    }
}

fn read_one(plan: &Plan, input: &mut SafeInput) -> InputResult<String> {
    Ok(match plan {
        Plan::Int => input.read_i32()?.to_string(),
        Plan::Uint => input.read_u32()?.to_string(),
        Plan::Long => input.read_long()?.to_string(),
        Plan::Ulong => input.read_ulong()?.to_string(),
        Plan::LongLong => input.read_long_long()?.to_string(),
        Plan::UlongLong => input.read_ulong_long()?.to_string(),
        Plan::I128 => input.read_i128()?.to_string(),
        Plan::U128 => input.read_u128()?.to_string(),
        Plan::Float => input.read_f32()?.to_string(),
        Plan::Double => input.read_f64()?.to_string(),
        Plan::Char => input.read_char()?.escape_ascii().to_string(),
        Plan::Filtered(allowed) => {
            input.read_char_filtered(allowed)?.escape_ascii().to_string()
        }
        Plan::CString => input.read_terminated_string()?.as_bytes().escape_ascii().to_string(),
        Plan::String => input.read_counted_string()?.as_bytes().escape_ascii().to_string(),
        Plan::Bool => input.read_bool()?.to_string(),
    })
}

/// Read one value with the sentinel returning getters and print whatever comes back.
///
/// # Errors
///
/// Returns an error if `--allowed` is unusable, or `out` can't be written to.
pub fn run_legacy(
    cli_arg: &CLIArg,
    input: &mut LegacyInput,
    out: &mut impl Write,
) -> miette::Result<()> {
    let value = match Plan::try_from_cli_arg(cli_arg)? {
        Plan::Int => input.get_int().to_string(),
        Plan::Uint => input.get_uint().to_string(),
        Plan::Long => input.get_long().to_string(),
        Plan::Ulong => input.get_ulong().to_string(),
        Plan::LongLong => input.get_long_long().to_string(),
        Plan::UlongLong => input.get_ulong_long().to_string(),
        Plan::I128 => input.safe_input.read_i128().or_sentinel().to_string(),
        Plan::U128 => input.safe_input.read_u128().or_sentinel().to_string(),
        Plan::Float => input.get_float().to_string(),
        Plan::Double => input.get_double().to_string(),
        Plan::Char => format_legacy_char(input.get_char()),
        Plan::Filtered(allowed) => format_legacy_char(input.get_char_filtered(&allowed)),
        Plan::CString => input.get_c_string().map_or_else(
            || NO_VALUE_LINE.to_string(),
            |it| it.as_bytes().escape_ascii().to_string(),
        ),
        Plan::String => input.get_string().map_or_else(
            || NO_VALUE_LINE.to_string(),
            |it| it.as_bytes().escape_ascii().to_string(),
        ),
        Plan::Bool => input.get_bool().to_string(),
    };

    writeln!(out, "value: {value}").into_diagnostic()
}

/// A byte is shown escaped, [`crate::EOF`] as its number.
fn format_legacy_char(value: std::ffi::c_int) -> String {
    u8::try_from(value).map_or_else(|_| value.to_string(), |it| it.escape_ascii().to_string())
}
