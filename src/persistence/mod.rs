//! Persistence - The catalog as a single serialized document.
//!
//! The whole catalog (authors, paintings, facts) is written as one JSON
//! document and replaced wholesale on every flush. [`DocumentStore`] is the
//! seam between the catalog and where that document lives:
//!
//! - [`JsonFileStore`] keeps it in a file on disk.
//! - [`InMemoryDocumentStore`] keeps it in memory, for tests and embedding.
//!
//! ## Document layout
//!
//! ```json
//! {
//!   "authors":   [{ "id", "name", "birth_year", "country", "portrait" }],
//!   "paintings": [{ "id", "title", "author_id", "year", "image_url", "is_favorite", "is_popular" }],
//!   "facts":     [{ "id", "text" }]
//! }
//! ```

mod error;
mod in_memory;
mod json_file;

use serde::{Deserialize, Serialize};

use crate::model::{Author, Fact, Painting};

/// The full catalog state, in stored order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub paintings: Vec<Painting>,
    #[serde(default)]
    pub facts: Vec<Fact>,
}

impl CatalogDocument {
    pub fn new(authors: Vec<Author>, paintings: Vec<Painting>, facts: Vec<Fact>) -> Self {
        Self {
            authors,
            paintings,
            facts,
        }
    }
}

/// Durable home of the catalog document.
pub trait DocumentStore: Send + Sync {
    /// Read the stored document.
    ///
    /// Returns [`PersistenceError::NotFound`] when nothing has been stored yet
    /// and [`PersistenceError::Corrupt`] when the stored bytes do not parse.
    fn load(&self) -> Result<CatalogDocument, PersistenceError>;

    /// Replace the stored document with `document`.
    fn save(&self, document: &CatalogDocument) -> Result<(), PersistenceError>;
}

pub use error::PersistenceError;
pub use in_memory::InMemoryDocumentStore;
pub use json_file::JsonFileStore;
