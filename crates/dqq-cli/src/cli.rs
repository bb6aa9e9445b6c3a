//! CLI argument definitions for the DQQ tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dqq",
    version,
    about = "Diet Quality Questionnaire toolkit - score meal records into diet-quality indicators",
    long_about = "Score recorded meals against the Diet Quality Questionnaire (DQQ).\n\n\
                  Reads per-meal consumption records from JSON or CSV exports, merges\n\
                  meals into daily answer sets, and computes the published indicator set\n\
                  (NCD-Protect, NCD-Risk, GDR, FGDS, MDD-W, All-5, and composites)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

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

#[derive(Subcommand)]
pub enum Command {
    /// Score a meal export into per-day diet-quality indicators.
    Score(ScoreArgs),

    /// List the 29 DQQ food-group questions.
    Questions,
}

#[derive(Parser)]
pub struct ScoreArgs {
    /// Path to the meal export (.json array or .csv).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Input format (default: inferred from the file extension).
    #[arg(long = "format", value_enum)]
    pub format: Option<InputFormatArg>,

    /// Age in years, used to gate the MDD-W indicator.
    #[arg(long = "age", value_name = "YEARS")]
    pub age: Option<u32>,

    /// Gender, used to gate the MDD-W indicator.
    #[arg(long = "gender", value_enum)]
    pub gender: Option<GenderArg>,

    /// Emit a {date: indicators} JSON object instead of a summary table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum InputFormatArg {
    Json,
    Csv,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum GenderArg {
    Male,
    Female,
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
