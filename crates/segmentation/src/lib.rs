//! Segment query pipeline — filter vocabularies, categorical filter
//! selections, the filter engine, presentation-column projection, and
//! sorting.

pub mod engine;
pub mod project;
pub mod selection;
pub mod sort;
pub mod vocabulary;

pub use selection::{SegmentSelection, SortOrder, SortSpec};
pub use vocabulary::FilterVocabulary;
