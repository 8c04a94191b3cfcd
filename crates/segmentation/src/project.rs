//! Presentation-column projection, applied after filtering: internal
//! columns are dropped and the link column is derived.

use icp_core::{schema, Cell, ExplorerResult, Frame};

/// Drop `industries_clean`, then replace `PC URL` with a derived
/// `PC Link` column appended on the right: the cell value when it starts
/// with `http`, otherwise an empty string.
pub fn project(frame: &mut Frame) -> ExplorerResult<()> {
    frame.drop_column(schema::INDUSTRIES_CLEAN);

    if let Some(idx) = frame.column_index(schema::PC_URL) {
        let links: Vec<Cell> = frame
            .rows()
            .iter()
            .map(|row| match row[idx].as_str() {
                Some(url) if url.starts_with("http") => Cell::Str(url.to_string()),
                _ => Cell::Str(String::new()),
            })
            .collect();
        frame.push_column(schema::PC_LINK, links)?;
        frame.drop_column(schema::PC_URL);
    }
    Ok(())
}
