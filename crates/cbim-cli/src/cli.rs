//! CLI argument definitions for the ontology bundle validator.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "cbim-validate",
    version,
    about = "Validate the CBIM ontology bundle",
    long_about = "Validate the CBIM ontology bundle for internal consistency.\n\n\
                  Loads the seven ontology modules, checks each against the shared\n\
                  JSON Schema, and verifies the cross-module invariants: threshold\n\
                  constants, clearance kinetics, canonical phase IDs, CDE counts and\n\
                  terminology, and cross-standard mapping hooks."
)]
pub struct Cli {
    /// Skip the JSON Schema validation step.
    #[arg(long = "skip-schema")]
    pub skip_schema: bool,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
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
