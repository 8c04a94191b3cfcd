use thiserror::Error;

pub type ExplorerResult<T> = Result<T, ExplorerError>;

#[derive(Error, Debug)]
pub enum ExplorerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load dataset: {0}")]
    Load(String),

    #[error("Frame shape error: {0}")]
    Shape(String),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Dataset has no rows")]
    EmptyDataset,

    #[error("Export error: {0}")]
    Export(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
