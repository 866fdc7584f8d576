//! Projections - Read views that join a painting with its author.
//!
//! A [`PaintingView`] is built fresh on every read and never stored.
//! Projection is a pure function of a painting and the current author
//! collection: it cannot fail. A painting whose author no longer resolves
//! gets a default (empty) [`Author`] instead of an error.
//!
//! ## Example
//!
//! ```ignore
//! use art_gallery::projection::{project_all, AuthorIndex};
//!
//! let index = AuthorIndex::new(&authors);
//! let views = project_all(&paintings, &index, |_| true);
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{Author, Painting};

/// A painting with its author resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaintingView {
    pub id: String,
    pub title: String,
    pub author: Author,
    pub year: i32,
    pub image_url: String,
    pub is_favorite: bool,
    pub is_popular: bool,
}

impl PaintingView {
    /// Case-insensitive substring match against the title or the author name.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.author.name.to_lowercase().contains(needle)
    }
}

/// Identifier lookup over an author collection. Built once per read.
pub struct AuthorIndex<'a> {
    by_id: HashMap<&'a str, &'a Author>,
}

impl<'a> AuthorIndex<'a> {
    pub fn new(authors: &'a [Author]) -> Self {
        let mut by_id = HashMap::with_capacity(authors.len());
        for author in authors {
            // first author with a given id wins
            by_id.entry(author.id.as_str()).or_insert(author);
        }
        Self { by_id }
    }

    pub fn get(&self, id: &str) -> Option<&'a Author> {
        self.by_id.get(id).copied()
    }

    /// Resolve an author, falling back to the zero-value author.
    pub fn resolve(&self, id: &str) -> Author {
        self.get(id).cloned().unwrap_or_default()
    }
}

/// Build the view of a single painting.
pub fn project(painting: &Painting, authors: &AuthorIndex<'_>) -> PaintingView {
    PaintingView {
        id: painting.id.clone(),
        title: painting.title.clone(),
        author: authors.resolve(&painting.author_id),
        year: painting.year,
        image_url: painting.image_url.clone(),
        is_favorite: painting.is_favorite,
        is_popular: painting.is_popular,
    }
}

/// Project every painting accepted by `filter`, preserving stored order.
pub fn project_all<F>(
    paintings: &[Painting],
    authors: &AuthorIndex<'_>,
    filter: F,
) -> Vec<PaintingView>
where
    F: Fn(&Painting) -> bool,
{
    paintings
        .iter()
        .filter(|p| filter(p))
        .map(|p| project(p, authors))
        .collect()
}
