//! Dataset I/O — CSV loading with dtype inference, schema normalization,
//! the process-wide load cache, and CSV export.

pub mod cache;
pub mod export;
pub mod loader;
pub mod normalize;

pub use cache::LoadCache;
pub use export::EXPORT_FILE_NAME;
