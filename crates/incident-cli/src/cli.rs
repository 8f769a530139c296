//! CLI argument definitions for the incident unifier.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "incident-unify",
    version,
    about = "Unify incident exports from the Grid and Export systems into one SLA report",
    long_about = "Merge the Grid (TCloud) incident grid and the Export system ticket dump\n\
                  into one canonical record set, compute SLA deadlines and breach status,\n\
                  and write the unified report as a delimited table."
)]
pub struct Cli {
    /// Path to the Grid (TCloud) CSV export.
    #[arg(value_name = "GRID_CSV")]
    pub grid: PathBuf,

    /// Path to the Export system CSV dump.
    #[arg(value_name = "EXPORT_CSV")]
    pub export: PathBuf,

    /// Output path for the unified report (default: incidentes_unificados.csv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Responsible team retained by the export-side filter.
    #[arg(long = "team", value_name = "NAME")]
    pub team: Option<String>,

    /// Default SLA window, in hours, for rows without an explicit deadline.
    #[arg(long = "sla-hours", value_name = "HOURS", default_value_t = 24)]
    pub sla_hours: i64,

    /// Print the summary without writing the report file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
