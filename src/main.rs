use anyhow::Context;
use clap::Parser;
use proj_catalog::cli::{args::Args, commands};
use std::process;
use tracing::error;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    if let Err(e) = commands::setup_logging(&args) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    let result = commands::run(&args)
        .with_context(|| format!("Failed to convert '{}'", args.input_path.display()));

    match result {
        Ok(_stats) => {
            // Summary has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Reported once through the logging layer
            error!("{:#}", error);
            process::exit(1);
        }
    }
}
