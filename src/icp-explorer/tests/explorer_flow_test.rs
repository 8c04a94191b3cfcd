//! Integration test for the full load → filter → project → sort →
//! aggregate → export flow over an in-memory CSV upload.

#[cfg(test)]
mod tests {
    use icp_core::config::ReportingConfig;
    use icp_dataset::{export, loader};
    use icp_reporting::{compute_view, RankedCounts};
    use icp_segmentation::{SegmentSelection, SortOrder, SortSpec};

    /// Small dataset exercising the legacy location header, both URL
    /// shapes, and a droppable internal column.
    fn sample_csv() -> &'static str {
        "cleaned_roles,gpt_industry,Aggregated Location,state,city,pool_size,PC URL,industries_clean,primary_role\n\
         \"Manager, Ops\",Retail,\"Austin, TX\",TX,Austin,5,https://a.example,retail-raw,Manager\n\
         Engineer,Tech,\"Austin, TX\",TX,Austin,5,not-a-url,tech-raw,Engineer\n\
         Manager,Retail,\"Dallas, TX\",TX,Dallas,9,,retail-raw,Manager\n"
    }

    #[test]
    fn test_full_flow() {
        let raw = loader::load_bytes(sample_csv().as_bytes()).unwrap();
        // Legacy header normalized on load.
        assert!(raw.has_column("location_clean"));

        let selection = SegmentSelection {
            roles: vec!["Manager".into()],
            industries: vec!["Retail".into()],
            ..Default::default()
        };
        let sort = SortSpec::by("pool_size", SortOrder::Descending);
        let view = compute_view(&raw, &selection, &sort, &ReportingConfig::default()).unwrap();

        // Substring role match keeps "Manager, Ops" and "Manager";
        // adding industry=Retail keeps the same two rows.
        assert_eq!(view.row_count, 2);

        // Projection replaced the URL columns.
        assert!(view.table.has_column("PC Link"));
        assert!(!view.table.has_column("PC URL"));
        assert!(!view.table.has_column("industries_clean"));

        // Descending pool_size puts the Dallas row first.
        let city_idx = view.table.column_index("city").unwrap();
        assert_eq!(view.table.rows()[0][city_idx].to_string(), "Dallas");

        let pool = view.pool_size.as_ref().unwrap();
        assert_eq!(pool.mean, 7);
        assert_eq!(pool.median, 7);

        let Some(RankedCounts::Rows(cities)) = &view.top_cities else {
            panic!("expected city rows");
        };
        assert_eq!(cities.len(), 2);
        assert!(cities.iter().all(|c| c.count == 1));
    }

    #[test]
    fn test_export_round_trip() {
        let raw = loader::load_bytes(sample_csv().as_bytes()).unwrap();
        let view = compute_view(
            &raw,
            &SegmentSelection::default(),
            &SortSpec::default(),
            &ReportingConfig::default(),
        )
        .unwrap();

        let bytes = export::to_csv_bytes(&view.table).unwrap();
        let reloaded = loader::load_bytes(&bytes).unwrap();
        assert_eq!(reloaded.columns(), view.table.columns());
        assert_eq!(reloaded.row_count(), view.table.row_count());
    }
}
