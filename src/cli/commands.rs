//! Command implementation for the catalog converter CLI
//!
//! Sets up logging, builds the configuration from the arguments, runs the
//! driver against the chosen sink and reports the outcome.

use colored::*;
use tracing::{debug, info};

use crate::cli::args::Args;
use crate::config::CatalogConfig;
use crate::constants::LOG_TARGET;
use crate::driver::CatalogDriver;
use crate::error::{CatalogError, Result};
use crate::models::ProcessingStats;
use crate::sink::open_sink;

/// Filter directive used when `RUST_LOG` is not set
pub fn log_directive(args: &Args) -> String {
    format!("{}={}", LOG_TARGET, args.get_log_level())
}

/// Set up compact logging on stderr; `RUST_LOG` overrides the flags
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_directive(args)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .try_init()
        .map_err(|e| CatalogError::configuration(format!("Logging already initialized: {}", e)))?;

    debug!("Logging initialized at level: {}", args.get_log_level());
    Ok(())
}

/// Build and validate the run configuration (defaults, then CLI overrides)
pub fn load_configuration(args: &Args) -> Result<CatalogConfig> {
    let mut config = CatalogConfig::default();
    apply_cli_overrides(&mut config, args);
    config.validate()?;
    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut CatalogConfig, args: &Args) {
    config.input_path = args.input_path.clone();
    config.output_path = args.output_path.clone();
    config.output_format = args.format;
    config.flush_trailing_record = args.flush_trailing;
}

/// Convert the configured input, finishing the sink on every path
pub fn run_convert(config: &CatalogConfig) -> Result<ProcessingStats> {
    info!("Converting {}", config.input_path.display());
    debug!("Configuration: {:?}", config);

    // Check before opening the sink so a missing input leaves no output file.
    if !config.input_path.is_file() {
        return Err(CatalogError::input_not_found(&config.input_path));
    }

    let mut sink = open_sink(config.output_format, config.output_path.as_deref())?;
    CatalogDriver::from_config(config).convert_file(&config.input_path, &mut sink)
}

/// Main command runner
pub fn run(args: &Args) -> Result<ProcessingStats> {
    let config = load_configuration(args)?;
    let stats = run_convert(&config)?;

    if args.show_summary() {
        print_summary(&config, &stats);
    }
    Ok(stats)
}

/// Print a short summary of the run to stderr
pub fn print_summary(config: &CatalogConfig, stats: &ProcessingStats) {
    let destination = config
        .output_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "stdout".to_string());

    eprintln!(
        "{} {} records from {} lines -> {} ({} ms)",
        "Converted".bright_green().bold(),
        stats.records_written.to_string().bright_yellow(),
        stats.lines_read,
        destination.bright_cyan(),
        stats.processing_time_ms
    );
    if stats.incomplete_records_skipped > 0 {
        eprintln!(
            "{} {} incomplete entries were skipped",
            "Note:".yellow().bold(),
            stats.incomplete_records_skipped
        );
    }
    if stats.trailing_record_discarded {
        eprintln!(
            "{} last entry had no trailing blank line and was skipped (use --flush-trailing to keep it)",
            "Note:".yellow().bold()
        );
    }
}
