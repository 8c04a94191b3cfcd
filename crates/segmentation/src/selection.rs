//! Filter selections and sort specifications supplied by the host on
//! every interaction.

use serde::{Deserialize, Serialize};

/// Chosen values per filter dimension. An empty list imposes no
/// constraint on that dimension.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SegmentSelection {
    pub roles: Vec<String>,
    pub industries: Vec<String>,
    pub locations: Vec<String>,
    pub states: Vec<String>,
    pub cities: Vec<String>,
}

impl SegmentSelection {
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
            && self.industries.is_empty()
            && self.locations.is_empty()
            && self.states.is_empty()
            && self.cities.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Sort request: one column, one direction. `column: None` asks the
/// engine to sort by the default column (`pool_size` when present, else
/// the first projected column).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: Option<String>,
    #[serde(default)]
    pub order: SortOrder,
}

impl SortSpec {
    pub fn by(column: impl Into<String>, order: SortOrder) -> Self {
        Self {
            column: Some(column.into()),
            order,
        }
    }
}
