//! Command-line argument definitions for the catalog converter
//!
//! This module defines the CLI interface using the clap derive API.

use clap::Parser;
use std::path::PathBuf;

use crate::constants::DEFAULT_INPUT_FILE;
use crate::sink::OutputFormat;

/// Convert a multi-line projection catalog into one tab-separated row per entry
#[derive(Debug, Clone, Parser)]
#[command(
    name = "proj-catalog",
    version,
    about = "Convert a multi-line projection catalog into a flat tab-separated table",
    long_about = "Reads a catalog where each entry spans a header line, a coordinate bounds \
                  line, an optional DISCONTINUED/DEPRECATED line and an identity line, with \
                  entries separated by blank lines. Writes one row per entry with the columns \
                  identity, name, description, min/max latitude, min/max longitude, projection \
                  and obsoletion."
)]
pub struct Args {
    /// Catalog file to convert
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT_FILE)]
    pub input_path: PathBuf,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output_path: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Tsv)]
    pub format: OutputFormat,

    /// Emit the last entry even when the input does not end with a blank line
    #[arg(long = "flush-trailing")]
    pub flush_trailing: bool,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors and skip the run summary
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Log level derived from verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Show the summary banner unless quiet
    pub fn show_summary(&self) -> bool {
        !self.quiet
    }
}
