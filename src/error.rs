//! Error handling for catalog conversion.
//!
//! Every failure is fatal: the driver stops at the first error and the
//! binary reports it once before exiting.

use std::num::ParseFloatError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Unrecognized line format at line {line_number}: '{line}'")]
    UnrecognizedLineFormat { line_number: usize, line: String },

    #[error("Invalid decimal for {field} at line {line_number}: '{value}' in '{line}'")]
    NumericFormat {
        line_number: usize,
        field: &'static str,
        value: String,
        line: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl CatalogError {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an input-not-found error
    pub fn input_not_found(path: impl Into<PathBuf>) -> Self {
        Self::InputNotFound { path: path.into() }
    }

    /// Create an unrecognized line error
    pub fn unrecognized_line(line_number: usize, line: impl Into<String>) -> Self {
        Self::UnrecognizedLineFormat {
            line_number,
            line: line.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Line number the error refers to, if it came from the input text
    pub fn line_number(&self) -> Option<usize> {
        match self {
            Self::UnrecognizedLineFormat { line_number, .. }
            | Self::NumericFormat { line_number, .. } => Some(*line_number),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
