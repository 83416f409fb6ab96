pub mod memory;

pub use memory::{MemoryStore, SeedData, StoreStats, TagOutcome};

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("no spot with id '{0}'")]
    SpotNotFound(String),
    #[error("no scraped item with id '{0}'")]
    ContentNotFound(String),
    #[error("no destination matching '{0}'")]
    DestinationNotFound(String),
}
