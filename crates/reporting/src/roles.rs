//! Top roles by location — (location, role) group counts over the
//! filtered frame.

use std::collections::BTreeMap;

use icp_core::{schema, Frame};

use crate::breakdown::LabelCount;

/// Group the filtered frame by (location, primary role), dropping rows
/// missing either key, and return the highest `limit` counts descending
/// as a role-keyed series. Group keys accumulate in ascending key order,
/// so the stable descending sort breaks count ties by key.
///
/// `None` when either source column is absent.
pub fn top_roles_by_location(frame: &Frame, limit: usize) -> Option<Vec<LabelCount>> {
    let location_idx = frame.column_index(schema::LOCATION_CLEAN)?;
    let role_idx = frame.column_index(schema::PRIMARY_ROLE)?;

    let mut counts: BTreeMap<(String, String), u64> = BTreeMap::new();
    for row in frame.rows() {
        let location = &row[location_idx];
        let role = &row[role_idx];
        if location.is_null() || role.is_null() {
            continue;
        }
        *counts
            .entry((location.to_string(), role.to_string()))
            .or_insert(0) += 1;
    }

    let mut groups: Vec<((String, String), u64)> = counts.into_iter().collect();
    groups.sort_by(|a, b| b.1.cmp(&a.1));

    Some(
        groups
            .into_iter()
            .take(limit)
            .map(|((_location, role), count)| LabelCount { label: role, count })
            .collect(),
    )
}
