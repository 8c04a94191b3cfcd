//! CSV export — serializes a frame back to comma-separated text with a
//! header row and no index column, as a downloadable byte payload.

use icp_core::{ExplorerError, ExplorerResult, Frame};

/// Suggested filename for the download the host offers.
pub const EXPORT_FILE_NAME: &str = "filtered_icp_data.csv";

pub fn to_csv_bytes(frame: &Frame) -> ExplorerResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(frame.columns())
        .map_err(|e| ExplorerError::Export(e.to_string()))?;
    for row in frame.rows() {
        writer
            .write_record(row.iter().map(|cell| cell.to_string()))
            .map_err(|e| ExplorerError::Export(e.to_string()))?;
    }
    writer
        .into_inner()
        .map_err(|e| ExplorerError::Export(e.to_string()))
}
