use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Duplicate item id: {0}")]
    DuplicateId(String),

    #[error("Duplicate item slug: {0}")]
    DuplicateSlug(String),

    #[error("Item {0} has a negative price")]
    NegativePrice(String),

    #[error("Catalog requires engine >= {0}, current is {1}")]
    EngineVersionMismatch(String, String),

    #[error("Invalid version string: {0}")]
    InvalidVersion(String),

    #[error("Collator unavailable: {0}")]
    Collation(String),

    #[error("Unknown sort key: {0}")]
    InvalidSortKey(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
