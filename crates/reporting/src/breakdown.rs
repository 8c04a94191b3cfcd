//! Frequency breakdowns over categorical columns of the filtered frame.

use std::collections::HashMap;

use icp_core::{schema, Frame};
use serde::{Deserialize, Serialize};

/// One row of a two-column (label, count) breakdown table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCount {
    pub label: String,
    pub count: u64,
}

/// Ranked breakdown of a column that exists in the frame. `NoData` is the
/// explicit signal for "column present, nothing non-missing after
/// filtering" — never an ambiguous empty table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankedCounts {
    NoData,
    Rows(Vec<LabelCount>),
}

/// Industry breakdown: count per distinct `gpt_industry` value, most
/// frequent first. `None` when the column is absent.
pub fn industry_breakdown(frame: &Frame) -> Option<Vec<LabelCount>> {
    frame.column_index(schema::GPT_INDUSTRY)?;
    Some(count_values(frame, schema::GPT_INDUSTRY, usize::MAX))
}

/// Top values of `city`/`state` by frequency. `None` when the column is
/// absent.
pub fn top_places(frame: &Frame, column: &str, limit: usize) -> Option<RankedCounts> {
    frame.column_index(column)?;
    let rows = count_values(frame, column, limit);
    if rows.is_empty() {
        Some(RankedCounts::NoData)
    } else {
        Some(RankedCounts::Rows(rows))
    }
}

/// Count distinct non-missing values, descending by count; equal counts
/// keep first-appearance order (stable sort over the first-seen list).
fn count_values(frame: &Frame, column: &str, limit: usize) -> Vec<LabelCount> {
    let cells = match frame.column(column) {
        Some(cells) => cells,
        None => return Vec::new(),
    };

    let mut counts: HashMap<String, u64> = HashMap::new();
    let mut first_seen: Vec<String> = Vec::new();
    for cell in cells {
        if cell.is_null() {
            continue;
        }
        let label = cell.to_string();
        match counts.get_mut(&label) {
            Some(count) => *count += 1,
            None => {
                counts.insert(label.clone(), 1);
                first_seen.push(label);
            }
        }
    }

    let mut rows: Vec<LabelCount> = first_seen
        .into_iter()
        .map(|label| {
            let count = counts[&label];
            LabelCount { label, count }
        })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows.truncate(limit);
    rows
}
