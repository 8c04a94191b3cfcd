//! Summary aggregation and view assembly — pool-size statistics, industry
//! breakdowns, top roles by location, top cities/states, and the single
//! `compute_view` entry point the host calls per interaction.

pub mod breakdown;
pub mod roles;
pub mod stats;
pub mod view;

pub use breakdown::{LabelCount, RankedCounts};
pub use stats::PoolSizeStats;
pub use view::{compute_view, SegmentView};
