//! Stable single-column sorting of the projected frame.

use std::cmp::Ordering;

use icp_core::{schema, ExplorerError, ExplorerResult, Frame};

use crate::selection::{SortOrder, SortSpec};

/// The column the host should propose as the initial sort choice:
/// `pool_size` when present, else the first column.
pub fn default_sort_column(frame: &Frame) -> Option<String> {
    if frame.has_column(schema::POOL_SIZE) {
        Some(schema::POOL_SIZE.to_string())
    } else {
        frame.columns().first().cloned()
    }
}

/// Stable sort by the requested column. Missing cells always sort last,
/// for either direction. `column: None` leaves the frame untouched.
pub fn sort_frame(frame: &mut Frame, spec: &SortSpec) -> ExplorerResult<()> {
    let Some(column) = &spec.column else {
        return Ok(());
    };
    let idx = frame
        .column_index(column)
        .ok_or_else(|| ExplorerError::UnknownColumn(column.clone()))?;
    let descending = spec.order == SortOrder::Descending;

    frame.sort_rows_by(|a, b| {
        let (ca, cb) = (&a[idx], &b[idx]);
        match (ca.is_null(), cb.is_null()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                let ord = ca.value_cmp(cb);
                if descending {
                    ord.reverse()
                } else {
                    ord
                }
            }
        }
    });
    Ok(())
}
