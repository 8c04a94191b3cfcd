pub mod config;
pub mod error;
pub mod frame;
pub mod schema;

pub use config::AppConfig;
pub use error::{ExplorerError, ExplorerResult};
pub use frame::{Cell, Frame};
