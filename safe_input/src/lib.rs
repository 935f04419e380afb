// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_safe_input
//!
//! Bounded, validated, line oriented input for interactive command line programs.
//!
//! Every typed getter on [`SafeInput`] reads exactly one line from `stdin`, never
//! more than a fixed number of bytes. A line that is too long is drained and
//! discarded, so it can't corrupt the next read. Malformed input is reported on
//! `stderr` (see [`DiagnosticSink`]) and the user is asked again. End of stream is
//! never retried, it comes back as [`InputError::EndOfStream`].
//!
//! ```no_run
//! use r3bl_safe_input::{AllowSet, InputError, SafeInput};
//!
//! # fn main() -> miette::Result<()> {
//! let mut input = SafeInput::new_stdin();
//!
//! let count = input.read_u32()?;
//! let menu = AllowSet::try_new("abq")?;
//! let choice = input.read_char_filtered(&menu)?;
//!
//! match input.read_terminated_string() {
//!     Ok(name) => println!("{count} {choice} {}", name.to_string_lossy()),
//!     Err(InputError::EndOfStream) => println!("bye"),
//!     Err(other) => return Err(other.into()),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! | Module         | What it does                                                 |
//! | :------------- | :----------------------------------------------------------- |
//! | `line_reader`  | [`InputDevice::read_line()`], the bounded read-and-drain step |
//! | `accessors`    | [`SafeInput`] and its typed getters                           |
//! | `config`       | [`InputConfig`] and [`RetryPolicy`]                           |
//! | `compat`       | [`LegacyInput`] and free functions that return sentinels     |
//! | `log`          | Opt-in `tracing` output for binaries                         |
//! | `test_fixtures`| Scripted input device and capturing diagnostic sink          |

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod accessors;
pub mod common;
pub mod compat;
pub mod config;
pub mod demo;
pub mod line_reader;
pub mod log;
pub mod terminal_io;
pub mod test_fixtures;

// Re-export.
pub use accessors::*;
pub use common::*;
pub use compat::*;
pub use config::*;
pub use demo::*;
pub use line_reader::*;
pub use log::*;
pub use terminal_io::*;
pub use test_fixtures::*;
