// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{num::NonZeroU32, path::PathBuf};

use clap::{Args, Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(bin_name = "safe_input_demo")]
#[command(about = "Read validated values from stdin, one per line")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/_derive/#overview>
pub struct CLIArg {
    #[arg(value_enum, help = "Type of value to read")]
    pub kind: DemoKind,

    #[arg(
        long,
        short = 'a',
        value_name = "chars",
        help = "Characters accepted by `char-filtered`, eg: `yn`"
    )]
    pub allowed: Option<String>,

    #[arg(
        long,
        short = 'r',
        conflicts_with = "legacy",
        help = "Keep reading values until the end of the input stream"
    )]
    pub repeat: bool,

    #[arg(
        long,
        short = 'm',
        value_name = "count",
        help = "Give up after this many invalid lines, instead of asking forever"
    )]
    pub max_attempts: Option<NonZeroU32>,

    #[arg(
        long,
        help = "Use the sentinel returning getters, and print the sentinel when there is no value"
    )]
    pub legacy: bool,

    #[arg(
        long,
        short = 'c',
        value_name = "json file",
        help = "Load buffer sizes and retry policy from a JSON file"
    )]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging"
    )]
    pub enable_logging: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DemoKind {
    #[clap(help = "Signed 32 bit integer")]
    Int,
    #[clap(help = "Unsigned 32 bit integer")]
    Uint,
    #[clap(help = "Platform `long`")]
    Long,
    #[clap(help = "Platform `unsigned long`")]
    Ulong,
    #[clap(help = "Signed 64 bit integer")]
    LongLong,
    #[clap(help = "Unsigned 64 bit integer")]
    UlongLong,
    #[clap(help = "Signed 128 bit integer")]
    I128,
    #[clap(help = "Unsigned 128 bit integer")]
    U128,
    #[clap(help = "32 bit float")]
    Float,
    #[clap(help = "64 bit float")]
    Double,
    #[clap(help = "Single character, an empty line is a newline")]
    Char,
    #[clap(help = "Single character from the `--allowed` set")]
    CharFiltered,
    #[clap(help = "Line returned with a terminating zero byte")]
    CString,
    #[clap(help = "Line returned with its length")]
    String,
    #[clap(help = "`y` or `n`")]
    Bool,
}
