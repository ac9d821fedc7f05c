//! Conversion driver.
//!
//! Reads input lines in order, classifies each one, feeds the field groups
//! into the current [`RecordAccumulator`] and flushes it to the sink on
//! every blank line. A block that is still missing a field group when it
//! is flushed is skipped with a warning. The first unrecognized line,
//! malformed decimal or read failure stops the run; records already handed
//! to the sink stay there.

#[cfg(test)]
pub mod tests;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use tracing::{debug, info, trace, warn};

use crate::accumulator::{FlushOutcome, RecordAccumulator};
use crate::classifier::{LineClass, LineClassifier};
use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::models::ProcessingStats;
use crate::sink::RecordSink;

/// Drives classification and accumulation over a line sequence
#[derive(Debug, Clone, Default)]
pub struct CatalogDriver {
    classifier: LineClassifier,
    flush_trailing_record: bool,
}

impl CatalogDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new().with_flush_trailing_record(config.flush_trailing_record)
    }

    /// Flush a block that is not followed by a blank line at end of input.
    /// Off by default: such a block is dropped.
    pub fn with_flush_trailing_record(mut self, enabled: bool) -> Self {
        self.flush_trailing_record = enabled;
        self
    }

    /// Process a file and finish the sink, whether or not processing succeeded
    pub fn convert_file<S>(&self, path: &Path, sink: &mut S) -> Result<ProcessingStats>
    where
        S: RecordSink + ?Sized,
    {
        let outcome = self.process_file(path, sink);
        let finished = sink.finish();
        let stats = outcome?;
        finished?;
        Ok(stats)
    }

    /// Open `path` and process its lines. Does not finish the sink.
    pub fn process_file<S>(&self, path: &Path, sink: &mut S) -> Result<ProcessingStats>
    where
        S: RecordSink + ?Sized,
    {
        if !path.is_file() {
            return Err(CatalogError::input_not_found(path));
        }

        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CatalogError::input_not_found(path),
            _ => CatalogError::io(format!("Failed to open '{}'", path.display()), e),
        })?;

        info!("Reading catalog from {}", path.display());
        self.process_reader(BufReader::new(file), sink)
    }

    pub fn process_reader<R, S>(&self, reader: R, sink: &mut S) -> Result<ProcessingStats>
    where
        R: BufRead,
        S: RecordSink + ?Sized,
    {
        self.process_lines(reader.lines(), sink)
    }

    /// Process in-memory text
    pub fn process_str<S>(&self, text: &str, sink: &mut S) -> Result<ProcessingStats>
    where
        S: RecordSink + ?Sized,
    {
        self.process_lines(text.lines().map(Ok::<_, io::Error>), sink)
    }

    pub fn process_lines<I, L, S>(&self, lines: I, sink: &mut S) -> Result<ProcessingStats>
    where
        I: IntoIterator<Item = io::Result<L>>,
        L: AsRef<str>,
        S: RecordSink + ?Sized,
    {
        let start_time = Instant::now();
        let mut stats = ProcessingStats::default();
        let mut current = RecordAccumulator::new();

        for (index, line) in lines.into_iter().enumerate() {
            let line_number = index + 1;
            let line = line
                .map_err(|e| CatalogError::io(format!("Failed to read line {}", line_number), e))?;
            let text = line.as_ref().trim_end_matches('\r');
            stats.lines_read = line_number;

            let class = self.classifier.classify(text).map_err(|e| {
                CatalogError::NumericFormat {
                    line_number,
                    field: e.field,
                    value: e.value,
                    line: text.to_string(),
                    source: e.source,
                }
            })?;
            trace!("Line {}: {:?}", line_number, class.category());

            match class {
                LineClass::Empty => {
                    stats.blank_lines += 1;
                    current = flush_into(current, line_number, sink, &mut stats)?;
                }
                LineClass::Location(bounds) => {
                    current.apply_location(bounds);
                }
                LineClass::Header(header) => {
                    current.apply_header(header);
                }
                LineClass::Obsoletion(status) => {
                    current.apply_obsoletion(status);
                }
                LineClass::Identity(identity) => {
                    current.apply_identity(identity);
                }
                LineClass::Unknown => {
                    return Err(CatalogError::unrecognized_line(line_number, text));
                }
            }
        }

        if !current.is_empty() {
            if self.flush_trailing_record {
                debug!("Flushing unterminated record at end of input");
                let written = stats.records_written;
                flush_into(current, stats.lines_read, sink, &mut stats)?;
                stats.trailing_record_flushed = stats.records_written > written;
            } else {
                // No blank line after the last block: it is dropped.
                warn!(
                    "Input ended without a blank line; discarding unterminated record after line {}",
                    stats.lines_read
                );
                stats.trailing_record_discarded = true;
            }
        }

        stats.processing_time_ms = start_time.elapsed().as_millis();
        info!(
            "Processed {} lines into {} records ({} incomplete skipped)",
            stats.lines_read, stats.records_written, stats.incomplete_records_skipped
        );

        Ok(stats)
    }
}

fn flush_into<S>(
    current: RecordAccumulator,
    line_number: usize,
    sink: &mut S,
    stats: &mut ProcessingStats,
) -> Result<RecordAccumulator>
where
    S: RecordSink + ?Sized,
{
    let (outcome, next) = current.flush();
    match outcome {
        FlushOutcome::Empty => {}
        FlushOutcome::Complete(record) => {
            debug!("Record {} complete at line {}", record.identity, line_number);
            sink.accept(record)?;
            stats.records_written += 1;
        }
        FlushOutcome::Incomplete { missing } => {
            warn!(
                "Skipping incomplete record ending at line {}: missing {}",
                line_number,
                missing.join(", ")
            );
            stats.incomplete_records_skipped += 1;
        }
    }
    Ok(next)
}
