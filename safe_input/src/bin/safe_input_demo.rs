// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Reads a value of the requested type from stdin and prints it. Try:
//!
//! ```text
//! printf '4a2\n42\n' | cargo run --bin safe_input_demo -- int
//! printf 'y\n' | cargo run --bin safe_input_demo -- char-filtered --allowed yn
//! ```

use clap::Parser;
use r3bl_safe_input::{CLIArg, SafeInput, TracingConfig, init_tracing, ok, run_legacy,
                      run_typed, try_load_config, with_stdin_input};

fn main() -> miette::Result<()> {
    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
    let cli_arg = CLIArg::parse();

    let enable_logging = cli_arg.global_options.enable_logging;
    enable_logging.then(|| {
        init_tracing(TracingConfig::new_file(None)).ok();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    });

    let config = try_load_config(&cli_arg)?;
    let mut stdout = std::io::stdout().lock();

    if cli_arg.legacy {
        with_stdin_input(|input| {
            input.safe_input.config = config;
            run_legacy(&cli_arg, input, &mut stdout)
        })?;
    } else {
        let mut input = SafeInput::new_stdin().with_config(config);
        run_typed(&cli_arg, &mut input, &mut stdout)?;
    }

    enable_logging.then(|| {
        tracing::debug!(message = "Stop logging...");
    });

    ok!()
}
