//! Core data structures for catalog conversion.
//!
//! Defines the completed record type, the field groups extracted from
//! individual lines, and the statistics reported after a run.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::num::ParseFloatError;
use std::str::FromStr;

use crate::constants::{FIELD_SEPARATOR, MARKER_DEPRECATED, MARKER_DISCONTINUED};

/// Status marker carried by an optional `# DISCONTINUED` / `# DEPRECATED` line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Obsoletion {
    Discontinued,
    Deprecated,
}

impl Obsoletion {
    /// Marker text as it appears in the catalog
    pub fn as_str(&self) -> &'static str {
        match self {
            Obsoletion::Discontinued => MARKER_DISCONTINUED,
            Obsoletion::Deprecated => MARKER_DEPRECATED,
        }
    }
}

impl fmt::Display for Obsoletion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Obsoletion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            MARKER_DISCONTINUED => Ok(Obsoletion::Discontinued),
            MARKER_DEPRECATED => Ok(Obsoletion::Deprecated),
            other => Err(format!("Unknown obsoletion marker: {}", other)),
        }
    }
}

/// Fields captured from a header line: `# {name} [{description}]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFields {
    pub name: String,
    pub description: String,
}

/// A decimal coordinate read from a location line.
///
/// The token is checked with `str::parse::<f64>` (`.` separator, no locale)
/// but kept verbatim, so `30.990` and `100` are written back unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinate {
    value: f64,
    text: String,
}

impl Coordinate {
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The token exactly as it appeared in the input
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl FromStr for Coordinate {
    type Err = ParseFloatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.parse::<f64>()?;
        Ok(Self {
            value,
            text: s.to_string(),
        })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// JSON carries the numeric value
impl Serialize for Coordinate {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(self.value)
    }
}

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(d)?;
        Ok(Self {
            value,
            text: format!("{:?}", value),
        })
    }
}

/// Coordinate bounds captured from a location line
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    pub min_lat: Coordinate,
    pub max_lat: Coordinate,
    pub min_lon: Coordinate,
    pub max_lon: Coordinate,
}

/// Fields captured from an identity line: `<{identity}> +proj={projection}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityFields {
    pub identity: String,
    pub projection: String,
}

/// One completed catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub identity: String,
    pub name: String,
    pub description: String,
    pub min_lat: Coordinate,
    pub max_lat: Coordinate,
    pub min_lon: Coordinate,
    pub max_lon: Coordinate,
    pub projection: String,
    #[serde(with = "obsoletion_text")]
    pub obsoletion: Option<Obsoletion>,
}

impl Record {
    /// Obsoletion marker text, empty when the record carried no status line
    pub fn obsolete_description(&self) -> &'static str {
        self.obsoletion.map(|o| o.as_str()).unwrap_or("")
    }

    /// Render the record as a single tab-separated row (no trailing newline)
    ///
    /// Column order: identity, name, description, min lat, max lat,
    /// min lon, max lon, projection, obsoletion.
    pub fn to_tsv_row(&self) -> String {
        [
            self.identity.clone(),
            self.name.clone(),
            self.description.clone(),
            self.min_lat.to_string(),
            self.max_lat.to_string(),
            self.min_lon.to_string(),
            self.max_lon.to_string(),
            self.projection.clone(),
            self.obsolete_description().to_string(),
        ]
        .join(FIELD_SEPARATOR)
    }
}

/// Serialize the optional marker as text so absent markers become `""`
mod obsoletion_text {
    use super::Obsoletion;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<Obsoletion>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(value.map(|o| o.as_str()).unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Obsoletion>, D::Error> {
        let text = String::deserialize(d)?;
        if text.is_empty() {
            return Ok(None);
        }
        text.parse().map(Some).map_err(serde::de::Error::custom)
    }
}

/// Processing statistics
#[derive(Debug, Clone, Default)]
pub struct ProcessingStats {
    pub lines_read: usize,
    pub blank_lines: usize,
    pub records_written: usize,
    /// Blocks closed by a blank line while some field group was still missing
    pub incomplete_records_skipped: usize,
    /// An unterminated final block was dropped at end of input
    pub trailing_record_discarded: bool,
    /// An unterminated final block was flushed at end of input
    pub trailing_record_flushed: bool,
    pub processing_time_ms: u128,
}
