//! Line classification for catalog input.
//!
//! Each line is matched against an ordered table of regex rules and the
//! first rule that matches decides the line's category. Rules see a single
//! line in isolation.
//!
//! Rule order:
//! 1. empty (whitespace only)
//! 2. location (`(lat: a, b) - (lon: c, d)`)
//! 3. header (`# name [description]`)
//! 4. obsoletion (`# DISCONTINUED` / `# DEPRECATED`)
//! 5. identity (`<id> +proj=value`)
//!
//! The header rule is loose enough to also accept a location line that
//! starts with `#` and carries brackets, so location must stay ahead of it.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::num::ParseFloatError;

use crate::constants::{
    EMPTY_PATTERN, HEADER_PATTERN, IDENTITY_PATTERN, LOCATION_PATTERN, MARKER_DEPRECATED,
    OBSOLETION_PATTERN,
};
use crate::models::{Bounds, Coordinate, HeaderFields, IdentityFields, Obsoletion};

/// Category tag assigned to a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Empty,
    Location,
    Header,
    Obsoletion,
    Identity,
    Unknown,
}

/// Classification result with the fields extracted for that category
#[derive(Debug, Clone, PartialEq)]
pub enum LineClass {
    Empty,
    Location(Bounds),
    Header(HeaderFields),
    Obsoletion(Obsoletion),
    Identity(IdentityFields),
    Unknown,
}

impl LineClass {
    pub fn category(&self) -> Category {
        match self {
            LineClass::Empty => Category::Empty,
            LineClass::Location(_) => Category::Location,
            LineClass::Header(_) => Category::Header,
            LineClass::Obsoletion(_) => Category::Obsoletion,
            LineClass::Identity(_) => Category::Identity,
            LineClass::Unknown => Category::Unknown,
        }
    }
}

/// A location value matched the pattern's shape but is not a valid decimal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub value: String,
    pub source: ParseFloatError,
}

struct Rule {
    category: Category,
    regex: Regex,
}

fn rule(category: Category, pattern: &str) -> Rule {
    let regex = Regex::new(pattern)
        .unwrap_or_else(|e| panic!("invalid {:?} line pattern: {}", category, e));
    Rule { category, regex }
}

/// Rules in evaluation order. Location must precede Header.
static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        rule(Category::Empty, EMPTY_PATTERN),
        rule(Category::Location, LOCATION_PATTERN),
        rule(Category::Header, HEADER_PATTERN),
        rule(Category::Obsoletion, OBSOLETION_PATTERN),
        rule(Category::Identity, IDENTITY_PATTERN),
    ]
});

/// Stateless line classifier over the shared rule table
#[derive(Clone, Copy)]
pub struct LineClassifier {
    rules: &'static [Rule],
}

impl LineClassifier {
    pub fn new() -> Self {
        Self {
            rules: RULES.as_slice(),
        }
    }

    /// Categories in the order their rules are tried
    pub fn rule_order(&self) -> Vec<Category> {
        self.rules.iter().map(|r| r.category).collect()
    }

    /// Classify one line and extract its fields.
    ///
    /// Returns `Ok(LineClass::Unknown)` when no rule matches; an `Err` only
    /// when a location line carries a malformed decimal.
    pub fn classify(&self, line: &str) -> Result<LineClass, FieldError> {
        for rule in self.rules {
            if let Some(caps) = rule.regex.captures(line) {
                return extract(rule.category, &caps);
            }
        }
        Ok(LineClass::Unknown)
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LineClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineClassifier")
            .field("rules", &self.rule_order())
            .finish()
    }
}

fn extract(category: Category, caps: &Captures<'_>) -> Result<LineClass, FieldError> {
    let class = match category {
        Category::Empty => LineClass::Empty,
        Category::Location => LineClass::Location(Bounds {
            min_lat: parse_decimal(caps, "min_lat")?,
            max_lat: parse_decimal(caps, "max_lat")?,
            min_lon: parse_decimal(caps, "min_lon")?,
            max_lon: parse_decimal(caps, "max_lon")?,
        }),
        Category::Header => LineClass::Header(HeaderFields {
            name: caps["name"].to_string(),
            description: caps["description"].to_string(),
        }),
        // The pattern only admits the two markers.
        Category::Obsoletion => LineClass::Obsoletion(match &caps["status"] {
            MARKER_DEPRECATED => Obsoletion::Deprecated,
            _ => Obsoletion::Discontinued,
        }),
        Category::Identity => LineClass::Identity(IdentityFields {
            identity: caps["identity"].to_string(),
            projection: caps["projection"].to_string(),
        }),
        Category::Unknown => LineClass::Unknown,
    };
    Ok(class)
}

fn parse_decimal(caps: &Captures<'_>, field: &'static str) -> Result<Coordinate, FieldError> {
    let value = &caps[field];
    value.parse::<Coordinate>().map_err(|source| FieldError {
        field,
        value: value.to_string(),
        source,
    })
}
