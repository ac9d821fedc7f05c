//! Test helpers shared by the driver test modules

pub mod record_flow;

use crate::driver::CatalogDriver;
use crate::error::Result;
use crate::models::ProcessingStats;
use crate::sink::MemorySink;

pub const SIMPLE_RECORD: &str = "# A [B]\n(lat: 1.0, 2.0) - (lon: 3.0, 4.0)\n<5> +proj=merc\n\n";

/// Build a well-formed block for the given identity
pub fn block(identity: u32, obsoletion: Option<&str>) -> String {
    let mut text = format!(
        "# Zone {id} [Test zone {id}]\n# Area (lat: -{id}.5, {id}.5) - (lon: -10.25, 10.25)\n",
        id = identity
    );
    if let Some(marker) = obsoletion {
        text.push_str(&format!("# {}\n", marker));
    }
    text.push_str(&format!(
        "<{}> +proj=tmerc +lat_0=0 +lon_0={} +k=1 +no_defs <>\n\n",
        identity, identity
    ));
    text
}

/// Run the default driver over `input`, collecting records in memory
pub fn run(input: &str) -> (Result<ProcessingStats>, MemorySink) {
    let mut sink = MemorySink::new();
    let result = CatalogDriver::new().process_str(input, &mut sink);
    (result, sink)
}
