//! CLI argument definitions for the `lcia` tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use lcia_model::Method;

#[derive(Parser)]
#[command(
    name = "lcia",
    version,
    about = "Map LCIA characterization factors onto a target elementary flow list",
    long_about = "Map life cycle impact assessment characterization factors onto a target \
                  elementary flow list.\n\n\
                  Reads canonical method tables and flow mapping files (CSV) and writes \
                  the mapped, optionally consolidated table."
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
    /// Map the flows of a method table.
    Map(MapArgs),

    /// List the mapping systems present in a mapping file.
    Systems(SystemsArgs),

    /// List the supported LCIA methods.
    Methods,
}

#[derive(Args)]
pub struct MapArgs {
    /// Method table with canonical column headers.
    #[arg(value_name = "METHOD_CSV")]
    pub input: PathBuf,

    /// Flow mapping file (default: $LCIA_FLOW_MAPPING).
    #[arg(long = "mapping", value_name = "MAPPING_CSV")]
    pub mapping: Option<PathBuf>,

    /// Mapping system (SourceListName) to apply.
    #[arg(long = "system", value_name = "NAME")]
    pub system: Option<String>,

    /// Supported method the table holds (id, name or mapping system).
    ///
    /// Supplies the default mapping system and case sensitivity, and always
    /// consolidates duplicate factors.
    #[arg(long = "method", value_name = "METHOD", value_parser = parse_method)]
    pub method: Option<Method>,

    /// Keep rows whose flow has no mapping.
    #[arg(long = "preserve-unmapped")]
    pub preserve_unmapped: bool,

    /// Match source flow names case-insensitively.
    #[arg(long = "case-insensitive")]
    pub case_insensitive: bool,

    /// Treat `unspecified` context segments like a missing compartment.
    #[arg(long = "drop-unspecified")]
    pub drop_unspecified: bool,

    /// Average factors that end up on the same flow and indicator.
    #[arg(long = "collapse")]
    pub collapse: bool,

    /// Keep only these indicators (repeatable).
    #[arg(long = "indicator", value_name = "NAME")]
    pub indicators: Vec<String>,

    /// Keep only these method names (repeatable).
    #[arg(long = "method-name", value_name = "NAME")]
    pub method_names: Vec<String>,

    /// Write the mapped table here; without it only the summary is printed.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct SystemsArgs {
    /// Flow mapping file (default: $LCIA_FLOW_MAPPING).
    #[arg(value_name = "MAPPING_CSV")]
    pub mapping: Option<PathBuf>,
}

fn parse_method(value: &str) -> Result<Method, String> {
    Method::from_name(value).map_err(|error| error.to_string())
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
