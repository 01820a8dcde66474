//! CLI argument definitions for the report parser.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use medreport_model::Disease;

#[derive(Parser)]
#[command(
    name = "medreport",
    version,
    about = "Parse lab reports into disease assessment form values",
    long_about = "Extract clinical fields from CSV, XLS/XLSX, and PDF lab reports\n\
                  and map them onto the diabetes, heart disease, fever, and anemia\n\
                  assessment forms."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse a lab report and print the extracted form values.
    Parse(ParseArgs),

    /// List the form fields and alias spellings a report can fill.
    Fields(FieldsArgs),
}

#[derive(Parser)]
pub struct ParseArgs {
    /// Path to the report file (.csv, .xls, .xlsx, or .pdf).
    #[arg(value_name = "REPORT")]
    pub report: PathBuf,

    /// Output format for the extracted values.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Maximum accepted report size in megabytes.
    #[arg(long = "max-size-mb", value_name = "MB")]
    pub max_size_mb: Option<u64>,
}

#[derive(Parser)]
pub struct FieldsArgs {
    /// Restrict the listing to one disease (diabetes, heart, fever, anemia).
    #[arg(value_name = "DISEASE")]
    pub disease: Option<Disease>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
