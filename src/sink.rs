//! Output sinks for completed records.
//!
//! The driver only talks to the [`RecordSink`] trait. Concrete sinks write
//! tab-separated rows, JSON lines, or collect records in memory.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::models::Record;

/// Receives completed records
pub trait RecordSink {
    /// Accept one completed record
    fn accept(&mut self, record: Record) -> Result<()>;

    /// Flush anything buffered. Called on both success and failure paths.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<S: RecordSink + ?Sized> RecordSink for &mut S {
    fn accept(&mut self, record: Record) -> Result<()> {
        (**self).accept(record)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}

impl<S: RecordSink + ?Sized> RecordSink for Box<S> {
    fn accept(&mut self, record: Record) -> Result<()> {
        (**self).accept(record)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}

/// Output encodings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated rows, no header
    #[default]
    Tsv,
    /// One JSON object per line
    Json,
}

/// Writes one tab-separated row per record
pub struct TsvSink<W: Write> {
    writer: BufWriter<W>,
    rows: usize,
}

impl<W: Write> TsvSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
            rows: 0,
        }
    }

    pub fn rows_written(&self) -> usize {
        self.rows
    }

    /// Flush and return the underlying writer
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| CatalogError::io("Failed to flush TSV output", e.into_error()))
    }
}

impl<W: Write> RecordSink for TsvSink<W> {
    fn accept(&mut self, record: Record) -> Result<()> {
        writeln!(self.writer, "{}", record.to_tsv_row())
            .map_err(|e| CatalogError::io("Failed to write TSV row", e))?;
        self.rows += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        debug!("Flushing {} TSV rows", self.rows);
        self.writer
            .flush()
            .map_err(|e| CatalogError::io("Failed to flush TSV output", e))
    }
}

/// Writes one JSON object per line
pub struct JsonLinesSink<W: Write> {
    writer: BufWriter<W>,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| CatalogError::io("Failed to flush JSON output", e.into_error()))
    }
}

impl<W: Write> RecordSink for JsonLinesSink<W> {
    fn accept(&mut self, record: Record) -> Result<()> {
        serde_json::to_writer(&mut self.writer, &record)
            .map_err(|e| CatalogError::io("Failed to encode JSON record", e.into()))?;
        self.writer
            .write_all(b"\n")
            .map_err(|e| CatalogError::io("Failed to write JSON record", e))
    }

    fn finish(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| CatalogError::io("Failed to flush JSON output", e))
    }
}

/// Keeps records in memory, mainly for library callers and tests
#[derive(Debug, Default)]
pub struct MemorySink {
    pub records: Vec<Record>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordSink for MemorySink {
    fn accept(&mut self, record: Record) -> Result<()> {
        self.records.push(record);
        Ok(())
    }
}

/// Open a sink for the given format, writing to `output` or stdout
pub fn open_sink(format: OutputFormat, output: Option<&Path>) -> Result<Box<dyn RecordSink>> {
    let writer: Box<dyn Write> = match output {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent).map_err(|e| {
                    CatalogError::io(
                        format!("Failed to create output directory '{}'", parent.display()),
                        e,
                    )
                })?;
            }
            let file = File::create(path).map_err(|e| {
                CatalogError::io(
                    format!("Failed to create output file '{}'", path.display()),
                    e,
                )
            })?;
            debug!("Writing {:?} output to {}", format, path.display());
            Box::new(file)
        }
        None => Box::new(io::stdout()),
    };

    Ok(match format {
        OutputFormat::Tsv => Box::new(TsvSink::new(writer)),
        OutputFormat::Json => Box::new(JsonLinesSink::new(writer)),
    })
}
