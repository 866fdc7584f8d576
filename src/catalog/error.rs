//! Error types for catalog operations.

use thiserror::Error;

use crate::persistence::PersistenceError;

/// Error type for catalog reads and mutations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A required field is missing or empty.
    #[error("validation failed: {0}")]
    Validation(String),
    /// An author with this identifier already exists.
    #[error("author already exists: {0}")]
    DuplicateAuthor(String),
    /// A painting references an author that does not exist.
    #[error("author not found: {0}")]
    UnknownAuthor(String),
    /// Loading or flushing the catalog document failed.
    #[error("persistence error: {0}")]
    Persistence(#[from] PersistenceError),
    /// A thread panicked while holding the catalog lock.
    #[error("catalog lock poisoned during {0}")]
    LockPoisoned(&'static str),
}

impl CatalogError {
    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            CatalogError::Validation(_) => 400,
            CatalogError::DuplicateAuthor(_) => 400,
            CatalogError::UnknownAuthor(_) => 400,
            CatalogError::Persistence(_) => 500,
            CatalogError::LockPoisoned(_) => 500,
        }
    }
}
