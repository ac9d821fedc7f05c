//! Configuration management and validation.
//!
//! Configuration starts from defaults, then command-line overrides are
//! applied on top, then the result is validated before a run.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

use crate::constants::DEFAULT_INPUT_FILE;
use crate::error::{CatalogError, Result};
use crate::sink::OutputFormat;

/// Global configuration for a conversion run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog file to read
    pub input_path: PathBuf,

    /// File to write; stdout when absent
    pub output_path: Option<PathBuf>,

    /// Output encoding
    pub output_format: OutputFormat,

    /// Flush a final block that is not followed by a blank line instead of
    /// dropping it
    pub flush_trailing_record: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_FILE),
            output_path: None,
            output_format: OutputFormat::Tsv,
            flush_trailing_record: false,
        }
    }
}

impl CatalogConfig {
    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    pub fn with_flush_trailing_record(mut self) -> Self {
        self.flush_trailing_record = true;
        self
    }

    /// Check the configuration for unusable combinations
    pub fn validate(&self) -> Result<()> {
        if self.input_path.as_os_str().is_empty() {
            return Err(CatalogError::configuration("Input path must not be empty"));
        }

        if let Some(output) = &self.output_path {
            if output.as_os_str().is_empty() {
                return Err(CatalogError::configuration("Output path must not be empty"));
            }
            if output == &self.input_path {
                return Err(CatalogError::configuration(format!(
                    "Output path '{}' would overwrite the input file",
                    output.display()
                )));
            }
        }

        debug!("Configuration validated: {:?}", self);
        Ok(())
    }
}
