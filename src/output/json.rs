//! JSON output.

use crate::models::BandwidthReport;
use crate::processing::NetworkRow;

/// Pretty-printed JSON array of network rows.
pub fn network_json(rows: &[NetworkRow]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(rows)
}

/// Pretty-printed JSON object for a bandwidth report.
pub fn bandwidth_json(report: &BandwidthReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
