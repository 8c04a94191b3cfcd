//! View assembly — the pure entry point the host calls on every
//! selection change: filter, project, sort, aggregate.

use chrono::{DateTime, Utc};
use icp_core::config::ReportingConfig;
use icp_core::{schema, ExplorerError, ExplorerResult, Frame};
use icp_segmentation::selection::{SegmentSelection, SortSpec};
use icp_segmentation::{engine, project, sort};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::breakdown::{self, LabelCount, RankedCounts};
use crate::roles;
use crate::stats::{self, PoolSizeStats};

/// Everything the presentation layer renders for one interaction. Each
/// summary section is a capability: `None` means its source columns are
/// absent from the dataset and the section is omitted outright.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentView {
    /// Filtered, projected, sorted record set.
    pub table: Frame,
    pub row_count: usize,
    pub pool_size: Option<PoolSizeStats>,
    pub industries: Option<Vec<LabelCount>>,
    pub top_roles: Option<Vec<LabelCount>>,
    pub top_cities: Option<RankedCounts>,
    pub top_states: Option<RankedCounts>,
    pub generated_at: DateTime<Utc>,
}

/// Recompute the full view from the cached raw frame. Refuses an empty
/// raw frame with [`ExplorerError::EmptyDataset`] — the stop signal that
/// halts the pipeline after a failed or empty load.
pub fn compute_view(
    raw: &Frame,
    selection: &SegmentSelection,
    sort_spec: &SortSpec,
    limits: &ReportingConfig,
) -> ExplorerResult<SegmentView> {
    if raw.is_empty() {
        return Err(ExplorerError::EmptyDataset);
    }

    let mut table = engine::apply(raw, selection);
    project::project(&mut table)?;

    // The host proposes a column; with none chosen, fall back to the
    // default over the projected header.
    let sort_spec = match &sort_spec.column {
        Some(_) => sort_spec.clone(),
        None => SortSpec {
            column: sort::default_sort_column(&table),
            order: sort_spec.order,
        },
    };
    sort::sort_frame(&mut table, &sort_spec)?;

    debug!(rows = table.row_count(), "view recomputed");

    Ok(SegmentView {
        row_count: table.row_count(),
        pool_size: stats::pool_size_stats(&table),
        industries: breakdown::industry_breakdown(&table),
        top_roles: roles::top_roles_by_location(&table, limits.top_roles),
        top_cities: breakdown::top_places(&table, schema::CITY, limits.top_places),
        top_states: breakdown::top_places(&table, schema::STATE, limits.top_places),
        generated_at: Utc::now(),
        table,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use icp_core::Cell;
    use icp_segmentation::selection::SortOrder;

    fn sample_frame() -> Frame {
        let mut frame = Frame::new(vec![
            "cleaned_roles".into(),
            "gpt_industry".into(),
            "city".into(),
            "state".into(),
            "pool_size".into(),
        ]);
        for (roles, industry, city, state, size) in [
            ("Manager, Ops", "Retail", "Austin", "TX", 5.0),
            ("Engineer", "Tech", "Austin", "TX", 5.0),
            ("Manager", "Retail", "Dallas", "TX", 9.0),
        ] {
            frame
                .push_row(vec![
                    Cell::Str(roles.into()),
                    Cell::Str(industry.into()),
                    Cell::Str(city.into()),
                    Cell::Str(state.into()),
                    Cell::Num(size),
                ])
                .unwrap();
        }
        frame
    }

    fn manager_selection() -> SegmentSelection {
        SegmentSelection {
            roles: vec!["Manager".into()],
            ..Default::default()
        }
    }

    #[test]
    fn test_manager_retail_selection() {
        let raw = sample_frame();
        let limits = ReportingConfig::default();

        let view =
            compute_view(&raw, &manager_selection(), &SortSpec::default(), &limits).unwrap();
        assert_eq!(view.row_count, 2);

        // Adding industry=Retail keeps the same two rows.
        let selection = SegmentSelection {
            roles: vec!["Manager".into()],
            industries: vec!["Retail".into()],
            ..Default::default()
        };
        let view = compute_view(&raw, &selection, &SortSpec::default(), &limits).unwrap();
        assert_eq!(view.row_count, 2);

        let pool = view.pool_size.unwrap();
        assert_eq!(pool.mean, 7);
        assert_eq!(pool.median, 7);

        let Some(RankedCounts::Rows(cities)) = view.top_cities else {
            panic!("expected city rows");
        };
        assert_eq!(
            cities,
            [
                LabelCount { label: "Austin".into(), count: 1 },
                LabelCount { label: "Dallas".into(), count: 1 }
            ]
        );
    }

    #[test]
    fn test_sort_applied_to_table() {
        let raw = sample_frame();
        let view = compute_view(
            &raw,
            &SegmentSelection::default(),
            &SortSpec::by("pool_size", SortOrder::Descending),
            &ReportingConfig::default(),
        )
        .unwrap();
        let first = &view.table.rows()[0];
        assert_eq!(first[view.table.column_index("pool_size").unwrap()], Cell::Num(9.0));
    }

    #[test]
    fn test_missing_column_degradation() {
        let mut raw = Frame::new(vec!["pool_size".into()]);
        raw.push_row(vec![Cell::Num(3.0)]).unwrap();
        let view = compute_view(
            &raw,
            &SegmentSelection::default(),
            &SortSpec::default(),
            &ReportingConfig::default(),
        )
        .unwrap();
        assert!(view.industries.is_none());
        assert!(view.top_roles.is_none());
        assert!(view.top_cities.is_none());
        assert!(view.top_states.is_none());
        assert!(view.pool_size.is_some());
    }

    #[test]
    fn test_empty_dataset_halts_pipeline() {
        let raw = Frame::new(vec!["city".into()]);
        let err = compute_view(
            &raw,
            &SegmentSelection::default(),
            &SortSpec::default(),
            &ReportingConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ExplorerError::EmptyDataset));
    }

    #[test]
    fn test_projection_applied_to_table() {
        let mut raw = Frame::new(vec!["PC URL".into(), "industries_clean".into()]);
        raw.push_row(vec![
            Cell::Str("https://example.com".into()),
            Cell::Str("x".into()),
        ])
        .unwrap();
        let view = compute_view(
            &raw,
            &SegmentSelection::default(),
            &SortSpec::default(),
            &ReportingConfig::default(),
        )
        .unwrap();
        assert_eq!(view.table.columns(), ["PC Link"]);
    }
}
