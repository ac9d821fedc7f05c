//! Projection Catalog Converter Library
//!
//! A Rust library for converting multi-line projection catalogs into flat
//! tab-separated tables, one row per catalog entry.
//!
//! Each catalog entry is a block of lines terminated by a blank line:
//!
//! ```text
//! # {name} [{description}]
//! ... (lat: {min}, {max}) - (lon: {min}, {max}) ...
//! # DEPRECATED                        (optional)
//! <{identity}> +proj={projection} ...
//! ```
//!
//! This library provides tools for:
//! - Classifying catalog lines with an ordered rule table
//! - Accumulating field groups into records and flushing them on blank lines
//! - Writing records as TSV or JSON lines through a pluggable sink
//!
//! ## Usage
//!
//! ```rust
//! use proj_catalog::{CatalogDriver, MemorySink};
//!
//! let input = "# A [B]\n(lat: 1.0, 2.0) - (lon: 3.0, 4.0)\n<5> +proj=merc\n\n";
//! let mut sink = MemorySink::new();
//! let stats = CatalogDriver::new().process_str(input, &mut sink).unwrap();
//!
//! assert_eq!(stats.records_written, 1);
//! assert_eq!(sink.records[0].to_tsv_row(), "5\tA\tB\t1.0\t2.0\t3.0\t4.0\tmerc\t");
//! ```

pub mod accumulator;
pub mod classifier;
pub mod config;
pub mod constants;
pub mod driver;
pub mod error;
pub mod models;
pub mod sink;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use accumulator::{FlushOutcome, RecordAccumulator};
pub use classifier::{Category, LineClass, LineClassifier};
pub use config::CatalogConfig;
pub use driver::CatalogDriver;
pub use error::{CatalogError, Result};
pub use models::{Coordinate, Obsoletion, ProcessingStats, Record};
pub use sink::{JsonLinesSink, MemorySink, OutputFormat, RecordSink, TsvSink};
