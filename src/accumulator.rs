//! In-progress record assembly.
//!
//! [`RecordAccumulator`] collects field groups from classified lines until a
//! blank line flushes it. Flushing consumes the accumulator and hands back a
//! fresh one alongside the outcome.

use crate::models::{Bounds, HeaderFields, IdentityFields, Obsoletion, Record};

/// Result of flushing an accumulator
#[derive(Debug, Clone, PartialEq)]
pub enum FlushOutcome {
    /// Nothing was applied since the last flush
    Empty,
    /// Header, location and identity were all applied
    Complete(Record),
    /// Some required field groups were applied, others were not
    Incomplete { missing: Vec<&'static str> },
}

/// Builder for one catalog record
#[derive(Debug, Clone, Default)]
pub struct RecordAccumulator {
    header: Option<HeaderFields>,
    bounds: Option<Bounds>,
    obsoletion: Option<Obsoletion>,
    identity: Option<IdentityFields>,
}

impl RecordAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field group has been applied
    pub fn is_empty(&self) -> bool {
        self.header.is_none()
            && self.bounds.is_none()
            && self.obsoletion.is_none()
            && self.identity.is_none()
    }

    pub fn apply_location(&mut self, bounds: Bounds) -> &mut Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn apply_header(&mut self, header: HeaderFields) -> &mut Self {
        self.header = Some(header);
        self
    }

    pub fn apply_obsoletion(&mut self, status: Obsoletion) -> &mut Self {
        self.obsoletion = Some(status);
        self
    }

    pub fn apply_identity(&mut self, identity: IdentityFields) -> &mut Self {
        self.identity = Some(identity);
        self
    }

    /// Required field groups that have not been applied yet
    pub fn missing_groups(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.header.is_none() {
            missing.push("header");
        }
        if self.bounds.is_none() {
            missing.push("location");
        }
        if self.identity.is_none() {
            missing.push("identity");
        }
        missing
    }

    /// Capture the current record and return it with a new empty accumulator
    pub fn flush(self) -> (FlushOutcome, RecordAccumulator) {
        let outcome = if self.is_empty() {
            FlushOutcome::Empty
        } else {
            let missing = self.missing_groups();
            match (self.header, self.bounds, self.identity) {
                (Some(header), Some(bounds), Some(identity)) => FlushOutcome::Complete(Record {
                    identity: identity.identity,
                    name: header.name,
                    description: header.description,
                    min_lat: bounds.min_lat,
                    max_lat: bounds.max_lat,
                    min_lon: bounds.min_lon,
                    max_lon: bounds.max_lon,
                    projection: identity.projection,
                    obsoletion: self.obsoletion,
                }),
                _ => FlushOutcome::Incomplete { missing },
            }
        };

        (outcome, RecordAccumulator::new())
    }
}
