//! Pool-size summary statistics over the filtered frame.

use icp_core::{schema, Cell, Frame};
use serde::{Deserialize, Serialize};

/// Count of one distinct pool-size value, for bar-chart rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueCount {
    pub value: f64,
    pub count: u64,
}

/// Mean and median are truncated to integers. The mode is the most
/// frequent value; ties resolve to the smallest tied value (first of the
/// sorted modes, implementation-defined rather than a contract).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolSizeStats {
    pub mean: i64,
    pub median: i64,
    pub mode: i64,
    /// Count per distinct value, ascending by value.
    pub distribution: Vec<ValueCount>,
}

/// `None` when the column is absent or holds no numeric values after
/// filtering; the summary section is omitted rather than erroring.
pub fn pool_size_stats(frame: &Frame) -> Option<PoolSizeStats> {
    let cells = frame.column(schema::POOL_SIZE)?;
    let mut values: Vec<f64> = cells.filter_map(Cell::as_f64).collect();
    if values.is_empty() {
        return None;
    }

    let mean = values.iter().sum::<f64>() / values.len() as f64;
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = values.len();
    let median = if n % 2 == 1 {
        values[n / 2]
    } else {
        (values[n / 2 - 1] + values[n / 2]) / 2.0
    };

    let distribution = run_lengths(&values);
    // Keep the first maximum so the smallest tied mode survives
    // (max_by_key would keep the last).
    let mut mode = distribution[0].value;
    let mut best = distribution[0].count;
    for vc in &distribution[1..] {
        if vc.count > best {
            best = vc.count;
            mode = vc.value;
        }
    }

    Some(PoolSizeStats {
        mean: mean.trunc() as i64,
        median: median.trunc() as i64,
        mode: mode.trunc() as i64,
        distribution,
    })
}

/// Collapse a sorted slice into (value, count) runs.
fn run_lengths(sorted: &[f64]) -> Vec<ValueCount> {
    let mut runs: Vec<ValueCount> = Vec::new();
    for &value in sorted {
        match runs.last_mut() {
            Some(run) if run.value == value => run.count += 1,
            _ => runs.push(ValueCount { value, count: 1 }),
        }
    }
    runs
}
