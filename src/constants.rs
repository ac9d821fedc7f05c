//! Application constants for the catalog converter
//!
//! Line patterns, default values and output formatting constants used
//! throughout the crate.

// =============================================================================
// Defaults
// =============================================================================

/// Input file used when no path is given on the command line
pub const DEFAULT_INPUT_FILE: &str = "input.txt";

/// Log filter target for this crate
pub const LOG_TARGET: &str = "proj_catalog";

// =============================================================================
// Line Patterns
// =============================================================================

/// Line with no non-whitespace content; terminates a record block
pub const EMPTY_PATTERN: &str = r"^\s*$";

/// `(lat: {min}, {max}) - (lon: {min}, {max})` anywhere on the line.
///
/// Numeric groups accept any run of digits and dots so that malformed
/// numbers still match and surface as parse errors rather than as
/// unrecognized lines.
pub const LOCATION_PATTERN: &str = r"\(lat:\s*(?P<min_lat>-?[0-9.]+)\s*,\s*(?P<max_lat>-?[0-9.]+)\s*\)\s*-\s*\(lon:\s*(?P<min_lon>-?[0-9.]+)\s*,\s*(?P<max_lon>-?[0-9.]+)\s*\)";

/// `# {name} [{description}]`; the description runs to the last `]`
pub const HEADER_PATTERN: &str = r"^#\s*(?P<name>.*?)\s*\[(?P<description>.*)\]";

/// `# DISCONTINUED` or `# DEPRECATED` on a line of its own
pub const OBSOLETION_PATTERN: &str = r"^#\s*(?P<status>DISCONTINUED|DEPRECATED)\s*$";

/// `<{identity}> +proj={projection} ...`
pub const IDENTITY_PATTERN: &str = r"^<(?P<identity>-?[0-9]+)>\s*\+proj=(?P<projection>\S+)";

/// Obsoletion marker values
pub const MARKER_DISCONTINUED: &str = "DISCONTINUED";
pub const MARKER_DEPRECATED: &str = "DEPRECATED";

// =============================================================================
// Output
// =============================================================================

/// Column separator for tabular output
pub const FIELD_SEPARATOR: &str = "\t";

/// Output column names, in emitted order
pub const OUTPUT_COLUMNS: &[&str] = &[
    "identity",
    "name",
    "description",
    "min_lat",
    "max_lat",
    "min_lon",
    "max_lon",
    "projection",
    "obsoletion",
];
