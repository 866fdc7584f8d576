mod catalog;
mod model;
mod persistence;

pub mod projection;

#[cfg(feature = "http")]
pub mod config;
#[cfg(feature = "http")]
pub mod http;
#[cfg(feature = "http")]
pub mod logging;

pub use catalog::{default_catalog, Catalog, CatalogError};
pub use model::{Author, Fact, Painting, Record};
pub use persistence::{
    CatalogDocument, DocumentStore, InMemoryDocumentStore, JsonFileStore, PersistenceError,
};
pub use projection::{AuthorIndex, PaintingView};
