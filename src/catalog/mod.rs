//! Catalog - The in-memory store of authors, paintings and facts.
//!
//! `Catalog<S>` owns the three collections and is the only way to read or
//! change them. Every successful mutation flushes the full state through the
//! [`DocumentStore`] before it returns, so the stored document and memory
//! never disagree.
//!
//! ## Example
//!
//! ```ignore
//! use art_gallery::{Catalog, JsonFileStore, Painting};
//!
//! let catalog = Catalog::open(JsonFileStore::new("gallery.json"))?;
//! catalog.add_painting(Painting::new("7", "Sunflowers", "vango").painted(1888))?;
//! let views = catalog.search_paintings("sunflow")?;
//! ```
//!
//! ## Concurrency
//!
//! State sits behind a single `RwLock`. Reads share the lock. A mutation holds
//! the write lock across the scan, the change and the flush, and is applied
//! to a copy that only replaces the live state once the flush succeeded.

mod error;
mod seed;

use std::sync::{RwLock, RwLockReadGuard};

use tracing::{debug, info, warn};

use crate::model::{position_of, Author, Fact, Painting, Record};
use crate::persistence::{CatalogDocument, DocumentStore};
use crate::projection::{project_all, AuthorIndex, PaintingView};

pub use error::CatalogError;
pub use seed::default_catalog;

/// The catalog store. Share it behind an `Arc`.
pub struct Catalog<S> {
    store: S,
    state: RwLock<CatalogDocument>,
}

impl<S: DocumentStore> Catalog<S> {
    /// Load the catalog from `store`, seeding and flushing the default
    /// catalog when nothing has been stored yet.
    ///
    /// A corrupt or unreadable document is returned as an error.
    pub fn open(store: S) -> Result<Self, CatalogError> {
        let document = match store.load() {
            Ok(document) => {
                info!(
                    authors = document.authors.len(),
                    paintings = document.paintings.len(),
                    facts = document.facts.len(),
                    "catalog loaded"
                );
                document
            }
            Err(e) if e.is_not_found() => {
                let document = default_catalog();
                store.save(&document)?;
                info!(
                    authors = document.authors.len(),
                    paintings = document.paintings.len(),
                    facts = document.facts.len(),
                    "no stored catalog, seeded defaults"
                );
                document
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            store,
            state: RwLock::new(document),
        })
    }

    /// Get a reference to the document store.
    pub fn store(&self) -> &S {
        &self.store
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// All authors in insertion order.
    pub fn list_authors(&self) -> Result<Vec<Author>, CatalogError> {
        Ok(self.read("list_authors")?.authors.clone())
    }

    /// All facts in stored order.
    pub fn list_facts(&self) -> Result<Vec<Fact>, CatalogError> {
        Ok(self.read("list_facts")?.facts.clone())
    }

    /// Every painting joined with its author.
    pub fn list_paintings(&self) -> Result<Vec<PaintingView>, CatalogError> {
        self.views("list_paintings", |_| true)
    }

    /// Paintings whose `author_id` equals `author_id`.
    pub fn list_paintings_by_author(
        &self,
        author_id: &str,
    ) -> Result<Vec<PaintingView>, CatalogError> {
        self.views("list_paintings_by_author", |p| p.author_id == author_id)
    }

    /// Paintings flagged as popular.
    pub fn list_popular_paintings(&self) -> Result<Vec<PaintingView>, CatalogError> {
        self.views("list_popular_paintings", |p| p.is_popular)
    }

    /// Case-insensitive substring search over painting titles and author
    /// names. An empty query matches every painting.
    pub fn search_paintings(&self, query: &str) -> Result<Vec<PaintingView>, CatalogError> {
        let needle = query.to_lowercase();
        let mut views = self.views("search_paintings", |_| true)?;
        views.retain(|view| view.matches(&needle));
        Ok(views)
    }

    /// A copy of the full catalog state.
    pub fn snapshot(&self) -> Result<CatalogDocument, CatalogError> {
        Ok(self.read("snapshot")?.clone())
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add an author. Rejects duplicate identifiers and empty names.
    pub fn add_author(&self, author: Author) -> Result<(), CatalogError> {
        self.commit("add_author", |state| {
            if position_of(&state.authors, author.id()).is_some() {
                return Err(CatalogError::DuplicateAuthor(author.id));
            }
            if author.name.is_empty() {
                return Err(CatalogError::Validation(
                    "author name is required".to_string(),
                ));
            }
            debug!(collection = Author::COLLECTION, id = %author.id, "adding author");
            state.authors.push(author);
            Ok(true)
        })?;
        Ok(())
    }

    /// Add a painting. Its `author_id` must name an existing author.
    ///
    /// Painting identifiers are not checked for uniqueness.
    pub fn add_painting(&self, painting: Painting) -> Result<(), CatalogError> {
        self.commit("add_painting", |state| {
            if position_of(&state.authors, &painting.author_id).is_none() {
                return Err(CatalogError::UnknownAuthor(painting.author_id));
            }
            debug!(collection = Painting::COLLECTION, id = %painting.id, "adding painting");
            state.paintings.push(painting);
            Ok(true)
        })?;
        Ok(())
    }

    /// Remove the first painting with this identifier, keeping the order of
    /// the rest. Returns whether a painting was removed.
    pub fn delete_painting(&self, id: &str) -> Result<bool, CatalogError> {
        self.commit("delete_painting", |state| {
            match position_of(&state.paintings, id) {
                Some(index) => {
                    state.paintings.remove(index);
                    debug!(collection = Painting::COLLECTION, id, "painting deleted");
                    Ok(true)
                }
                None => Ok(false),
            }
        })
    }

    /// Flip the favorite flag of the first painting with this identifier.
    /// Returns whether a painting was found.
    pub fn toggle_favorite(&self, id: &str) -> Result<bool, CatalogError> {
        self.commit("toggle_favorite", |state| {
            match position_of(&state.paintings, id) {
                Some(index) => {
                    let painting = &mut state.paintings[index];
                    painting.is_favorite = !painting.is_favorite;
                    debug!(
                        collection = Painting::COLLECTION,
                        id,
                        is_favorite = painting.is_favorite,
                        "favorite toggled"
                    );
                    Ok(true)
                }
                None => Ok(false),
            }
        })
    }

    /// Write the current state to the store.
    ///
    /// Holds the write lock for the whole save, so flushes never overlap
    /// each other or a mutation.
    pub fn flush(&self) -> Result<(), CatalogError> {
        let state = self
            .state
            .write()
            .map_err(|_| CatalogError::LockPoisoned("flush"))?;
        self.store.save(&state)?;
        Ok(())
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn read(
        &self,
        operation: &'static str,
    ) -> Result<RwLockReadGuard<'_, CatalogDocument>, CatalogError> {
        self.state
            .read()
            .map_err(|_| CatalogError::LockPoisoned(operation))
    }

    fn views<F>(
        &self,
        operation: &'static str,
        filter: F,
    ) -> Result<Vec<PaintingView>, CatalogError>
    where
        F: Fn(&Painting) -> bool,
    {
        let state = self.read(operation)?;
        let authors = AuthorIndex::new(&state.authors);
        Ok(project_all(&state.paintings, &authors, filter))
    }

    /// Run `mutate` against a copy of the state under the write lock.
    ///
    /// When `mutate` reports a change, the copy is flushed and then becomes
    /// the live state. On any error the live state is left as it was.
    fn commit<F>(&self, operation: &'static str, mutate: F) -> Result<bool, CatalogError>
    where
        F: FnOnce(&mut CatalogDocument) -> Result<bool, CatalogError>,
    {
        let mut state = self
            .state
            .write()
            .map_err(|_| CatalogError::LockPoisoned(operation))?;

        let mut next = state.clone();
        if !mutate(&mut next)? {
            return Ok(false);
        }

        if let Err(e) = self.store.save(&next) {
            warn!(operation, error = %e, "flush failed, mutation discarded");
            return Err(e.into());
        }

        *state = next;
        Ok(true)
    }
}
