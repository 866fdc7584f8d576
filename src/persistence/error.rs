//! Error type for document store operations.

use thiserror::Error;

/// Error type for loading or saving the catalog document.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// No document has been stored yet.
    #[error("no catalog document at {location}")]
    NotFound { location: String },
    /// The stored document could not be parsed.
    #[error("catalog document at {location} is corrupt: {source}")]
    Corrupt {
        location: String,
        #[source]
        source: serde_json::Error,
    },
    /// Reading or writing the storage failed.
    #[error("catalog storage I/O failed at {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },
    /// The document could not be serialized.
    #[error("catalog document could not be encoded: {0}")]
    Encode(#[source] serde_json::Error),
}

impl PersistenceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, PersistenceError::NotFound { .. })
    }
}
