use std::collections::HashSet;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlockListRepositoryError {
    #[error("failed to read block list {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to write block list {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

/// Durable storage for a set of block or allow entries.
pub trait BlockListRepository: Send + Sync {
    /// A missing backing store is an empty set, not an error.
    fn load(&self) -> Result<HashSet<String>, BlockListRepositoryError>;

    /// Replaces the stored entries with `entries`.
    fn save(&self, entries: &HashSet<String>) -> Result<(), BlockListRepositoryError>;
}
