//! Filter vocabularies — the distinct selectable values per dimension,
//! derived from the normalized raw frame.

use std::collections::BTreeSet;

use icp_core::{schema, Frame};
use serde::{Deserialize, Serialize};

/// Selectable values for every filter dimension, each sorted ascending.
/// Absent source columns yield empty vocabularies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterVocabulary {
    pub roles: Vec<String>,
    pub industries: Vec<String>,
    pub locations: Vec<String>,
    pub states: Vec<String>,
    pub cities: Vec<String>,
}

impl FilterVocabulary {
    pub fn extract(frame: &Frame) -> Self {
        Self {
            roles: token_vocabulary(frame, schema::CLEANED_ROLES),
            industries: token_vocabulary(frame, schema::GPT_INDUSTRY),
            locations: value_vocabulary(frame, schema::LOCATION_CLEAN),
            states: value_vocabulary(frame, schema::STATE),
            cities: value_vocabulary(frame, schema::CITY),
        }
    }
}

/// Distinct trimmed comma-separated tokens across all rows of a
/// multi-valued text column.
pub fn token_vocabulary(frame: &Frame, column: &str) -> Vec<String> {
    let Some(cells) = frame.column(column) else {
        return Vec::new();
    };
    let mut tokens = BTreeSet::new();
    for cell in cells {
        if cell.is_null() {
            continue;
        }
        for token in cell.to_string().split(',') {
            let token = token.trim();
            if !token.is_empty() {
                tokens.insert(token.to_string());
            }
        }
    }
    tokens.into_iter().collect()
}

/// Distinct non-missing values of a single-valued column.
pub fn value_vocabulary(frame: &Frame, column: &str) -> Vec<String> {
    let Some(cells) = frame.column(column) else {
        return Vec::new();
    };
    let values: BTreeSet<String> = cells
        .filter(|cell| !cell.is_null())
        .map(|cell| cell.to_string())
        .collect();
    values.into_iter().collect()
}
