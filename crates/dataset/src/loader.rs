//! CSV loader — parses comma-separated text with a header row into a
//! [`Frame`], from a filesystem path or an uploaded byte buffer.

use std::path::Path;

use icp_core::{Cell, ExplorerError, ExplorerResult, Frame};
use tracing::info;

use crate::normalize;

/// Load and normalize a dataset from a filesystem path.
pub fn load_path(path: &Path) -> ExplorerResult<Frame> {
    let bytes = std::fs::read(path)
        .map_err(|e| ExplorerError::Load(format!("{}: {}", path.display(), e)))?;
    let frame = load_bytes(&bytes)?;
    info!(
        path = %path.display(),
        rows = frame.row_count(),
        columns = frame.columns().len(),
        "dataset loaded"
    );
    Ok(frame)
}

/// Load and normalize a dataset from an in-memory upload.
pub fn load_bytes(bytes: &[u8]) -> ExplorerResult<Frame> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes);

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| ExplorerError::Load(format!("missing or malformed header row: {e}")))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut records = Vec::new();
    for result in reader.records() {
        let record =
            result.map_err(|e| ExplorerError::Load(format!("malformed CSV record: {e}")))?;
        records.push(record);
    }

    let numeric = infer_numeric_columns(columns.len(), &records);

    let mut frame = Frame::new(columns);
    for record in &records {
        let row: Vec<Cell> = record
            .iter()
            .enumerate()
            .map(|(idx, raw)| parse_cell(raw, numeric[idx]))
            .collect();
        frame.push_row(row)?;
    }

    normalize::canonicalize_location(&mut frame);
    Ok(frame)
}

/// A column is numeric when every non-missing cell parses as a float and
/// at least one such cell exists.
fn infer_numeric_columns(width: usize, records: &[csv::StringRecord]) -> Vec<bool> {
    (0..width)
        .map(|idx| {
            let mut saw_value = false;
            let all_parse = records.iter().all(|record| {
                let raw = record.get(idx).unwrap_or("").trim();
                if raw.is_empty() {
                    true
                } else {
                    saw_value = true;
                    raw.parse::<f64>().is_ok()
                }
            });
            saw_value && all_parse
        })
        .collect()
}

fn parse_cell(raw: &str, numeric: bool) -> Cell {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Cell::Null
    } else if numeric {
        match trimmed.parse::<f64>() {
            Ok(n) => Cell::Num(n),
            Err(_) => Cell::Str(raw.to_string()),
        }
    } else {
        Cell::Str(raw.to_string())
    }
}
