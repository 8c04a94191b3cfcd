//! Schema normalization — reconciles known legacy column names into their
//! canonical form before any vocabulary or filter logic runs.

use icp_core::{schema, Frame};

/// Rename `Aggregated Location` to `location_clean` when the canonical
/// column is absent. No-op otherwise; safe to call repeatedly.
pub fn canonicalize_location(frame: &mut Frame) {
    if frame.has_column(schema::AGGREGATED_LOCATION) && !frame.has_column(schema::LOCATION_CLEAN) {
        frame.rename_column(schema::AGGREGATED_LOCATION, schema::LOCATION_CLEAN);
    }
}
