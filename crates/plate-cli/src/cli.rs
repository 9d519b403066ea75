//! CLI argument definitions for the plate registry toolkit.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "plates",
    version,
    about = "Plate registry toolkit - generate and validate license plates",
    long_about = "Generate candidate license-plate numbers and validate plate\n\
                  issuance records against the regional format rules.\n\
                  Candidates carry no uniqueness guarantee; issued-plate\n\
                  uniqueness belongs to the registry database."
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
    /// Generate candidate plate numbers.
    Generate(GenerateArgs),

    /// Validate a plate issuance record.
    Validate(ValidateArgs),

    /// List the plate-issuing regions and their prefix letters.
    Regions,

    /// List the plate types a vehicle may be issued.
    PlateTypes(PlateTypesArgs),
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Vehicle type ("2-Wheel" selects the motorcycle formats).
    #[arg(long = "vehicle-type", value_name = "TYPE", default_value = "4-Wheel")]
    pub vehicle_type: String,

    /// Plate type (Private, For Hire, Government, Diplomatic, Electric,
    /// Hybrid, Trailer, Vintage). Unrecognized values use the default
    /// character classes.
    #[arg(long = "plate-type", value_name = "TYPE")]
    pub plate_type: String,

    /// Issuing region code (e.g. NCR, R4A).
    #[arg(long = "region", value_name = "CODE")]
    pub region: String,

    /// Number of candidates to generate.
    #[arg(long = "count", value_name = "N", default_value_t = 1)]
    pub count: usize,

    /// Seed for reproducible output (omit to draw from entropy).
    #[arg(long = "seed", value_name = "SEED")]
    pub seed: Option<u64>,

    /// Emit candidates as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Plate number as it would be stamped (e.g. "ABC 1234").
    #[arg(long = "plate-number", value_name = "PLATE")]
    pub plate_number: String,

    /// Plate type on the record.
    #[arg(long = "plate-type", value_name = "TYPE")]
    pub plate_type: String,

    /// Issuing region code.
    #[arg(long = "region", value_name = "CODE")]
    pub region: String,

    /// Issue date (YYYY-MM-DD).
    #[arg(long = "issued", value_name = "DATE")]
    pub plate_issue_date: String,

    /// Expiration date (YYYY-MM-DD); must fall after the issue date.
    #[arg(long = "expires", value_name = "DATE")]
    pub plate_expiration_date: String,

    /// Vehicle type the record belongs to.
    #[arg(long = "vehicle-type", value_name = "TYPE", default_value = "4-Wheel")]
    pub vehicle_type: String,

    /// Emit the validation report as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct PlateTypesArgs {
    /// Vehicle type to look up.
    #[arg(long = "vehicle-type", value_name = "TYPE")]
    pub vehicle_type: String,

    /// Model year; years before 1980 select the vintage rule set.
    #[arg(long = "year", value_name = "YYYY")]
    pub year: Option<String>,
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
