//! Filter engine — applies the selection to the raw frame as a set of
//! independent per-dimension predicates ANDed together.
//!
//! A dimension is skipped when its selection is empty or its source
//! column is absent; row order is preserved.

use icp_core::{schema, Cell, Frame};
use tracing::debug;

use crate::selection::SegmentSelection;

/// Produce the filtered subset of `raw` for `selection`.
pub fn apply(raw: &Frame, selection: &SegmentSelection) -> Frame {
    let mut filtered = raw.clone();
    if selection.is_empty() {
        return filtered;
    }

    // Resolve each dimension to a column index up front; None means the
    // dimension imposes no constraint.
    let roles = active(raw, schema::CLEANED_ROLES, &selection.roles);
    let industries = active(raw, schema::GPT_INDUSTRY, &selection.industries);
    let locations = active(raw, schema::LOCATION_CLEAN, &selection.locations);
    let states = active(raw, schema::STATE, &selection.states);
    let cities = active(raw, schema::CITY, &selection.cities);

    filtered.retain_rows(|row| {
        roles.map_or(true, |idx| role_matches(&row[idx], &selection.roles))
            && industries.map_or(true, |idx| value_selected(&row[idx], &selection.industries))
            && locations.map_or(true, |idx| value_selected(&row[idx], &selection.locations))
            && states.map_or(true, |idx| value_selected(&row[idx], &selection.states))
            && cities.map_or(true, |idx| value_selected(&row[idx], &selection.cities))
    });

    debug!(
        before = raw.row_count(),
        after = filtered.row_count(),
        "selection applied"
    );
    filtered
}

fn active(frame: &Frame, column: &str, selected: &[String]) -> Option<usize> {
    if selected.is_empty() {
        None
    } else {
        frame.column_index(column)
    }
}

/// Role cells hold comma-separated tags; a row matches when the cell is a
/// non-missing string containing any selected role as a substring, so
/// "Manager" also matches "Senior Manager, Ops".
fn role_matches(cell: &Cell, selected: &[String]) -> bool {
    match cell.as_str() {
        Some(value) => selected.iter().any(|role| value.contains(role.as_str())),
        None => false,
    }
}

/// Exact cell-value membership against the selected set.
fn value_selected(cell: &Cell, selected: &[String]) -> bool {
    if cell.is_null() {
        return false;
    }
    let value = cell.to_string();
    selected.iter().any(|choice| *choice == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_frame() -> Frame {
        let mut frame = Frame::new(vec![
            "cleaned_roles".into(),
            "gpt_industry".into(),
            "city".into(),
        ]);
        for (roles, industry, city) in [
            ("Manager, Ops", "Retail", "Austin"),
            ("Engineer", "Tech", "Austin"),
            ("Senior Manager, Ops", "Retail", "Dallas"),
        ] {
            frame
                .push_row(vec![
                    Cell::Str(roles.into()),
                    Cell::Str(industry.into()),
                    Cell::Str(city.into()),
                ])
                .unwrap();
        }
        frame
    }

    fn select_roles(roles: &[&str]) -> SegmentSelection {
        SegmentSelection {
            roles: roles.iter().map(|r| r.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_role_substring_containment() {
        let frame = sample_frame();
        let filtered = apply(&frame, &select_roles(&["Manager"]));
        assert_eq!(filtered.row_count(), 2);
        // "Senior Manager, Ops" matched by substring, not token equality
        assert_eq!(filtered.rows()[1][2], Cell::Str("Dallas".into()));
    }

    #[test]
    fn test_filters_are_anded() {
        let frame = sample_frame();
        let selection = SegmentSelection {
            roles: vec!["Manager".into()],
            industries: vec!["Retail".into()],
            ..Default::default()
        };
        assert_eq!(apply(&frame, &selection).row_count(), 2);

        let selection = SegmentSelection {
            roles: vec!["Manager".into()],
            industries: vec!["Tech".into()],
            ..Default::default()
        };
        assert_eq!(apply(&frame, &selection).row_count(), 0);
    }

    #[test]
    fn test_monotonic_and_order_independent() {
        let frame = sample_frame();
        let broad = apply(&frame, &select_roles(&["Manager"]));

        let narrow_selection = SegmentSelection {
            roles: vec!["Manager".into()],
            cities: vec!["Dallas".into()],
            ..Default::default()
        };
        let narrow = apply(&frame, &narrow_selection);
        assert!(narrow.row_count() <= broad.row_count());

        // Applying the city predicate before or after the role predicate
        // yields the same rows.
        let city_first = apply(
            &apply(
                &frame,
                &SegmentSelection {
                    cities: vec!["Dallas".into()],
                    ..Default::default()
                },
            ),
            &select_roles(&["Manager"]),
        );
        assert_eq!(city_first, narrow);
    }

    #[test]
    fn test_missing_column_skips_dimension() {
        let mut frame = Frame::new(vec!["pool_size".into()]);
        frame.push_row(vec![Cell::Num(5.0)]).unwrap();
        let selection = SegmentSelection {
            states: vec!["TX".into()],
            ..Default::default()
        };
        assert_eq!(apply(&frame, &selection).row_count(), 1);
    }

    #[test]
    fn test_missing_role_cell_never_matches() {
        let mut frame = Frame::new(vec!["cleaned_roles".into()]);
        frame.push_row(vec![Cell::Null]).unwrap();
        frame.push_row(vec![Cell::Str("Manager".into())]).unwrap();
        let filtered = apply(&frame, &select_roles(&["Manager"]));
        assert_eq!(filtered.row_count(), 1);
    }

    #[test]
    fn test_empty_selection_is_identity() {
        let frame = sample_frame();
        assert_eq!(apply(&frame, &SegmentSelection::default()), frame);
    }
}
