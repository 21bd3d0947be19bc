//! CLI argument definitions for the tuplemap demonstration driver.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tuplemap",
    version,
    about = "Map one source object into tuples and dynamic bags",
    long_about = "Map one source object into several destinations at once.\n\n\
                  Demonstrates the tuple adapter (fixed arity, up to 8 elements),\n\
                  the dynamic adapter (Item1..ItemN) and plain collection mapping."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -vvv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with timestamps (pretty and compact formats).
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the mapping scenarios and print the transcript.
    Run(RunArgs),

    /// List registered mappings with their member rules.
    Profiles,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Value of the source's first field.
    #[arg(long = "field1", default_value = "a")]
    pub field1: String,

    /// Value of the source's second field.
    #[arg(long = "field2", default_value = "b")]
    pub field2: String,

    /// Transcript format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: TranscriptFormatArg,

    /// Fail when a registered destination has members without a rule.
    #[arg(long = "strict")]
    pub strict: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum TranscriptFormatArg {
    Text,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
