//! JSON Output

use crate::table::ResultRow;

/// Render the recorded results as prettified, machine-readable JSON.
pub fn generate_json_report(rows: &[ResultRow]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(rows)
}
