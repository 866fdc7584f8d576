//! Models - Typed records held by the catalog.
//!
//! Authors, paintings and facts are plain serde structs. Each implements
//! [`Record`], which names the collection the record lives in and exposes
//! its identifier so the catalog can look records up generically.
//!
//! ## Example
//!
//! ```ignore
//! use art_gallery::{Author, Record};
//!
//! let author = Author::new("monet", "Claude Monet");
//! assert_eq!(author.id(), "monet");
//! assert_eq!(Author::COLLECTION, "authors");
//! ```

use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Trait for types that can be stored in a catalog collection.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// The collection name for this record type ("authors", "paintings", "facts").
    /// Matches the key of the collection in the persisted document.
    const COLLECTION: &'static str;

    /// Returns the identifier of this record.
    fn id(&self) -> &str;
}

/// Position of the first record with the given identifier.
pub(crate) fn position_of<R: Record>(records: &[R], id: &str) -> Option<usize> {
    records.iter().position(|r| r.id() == id)
}

/// An artist. Referenced by paintings through `author_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub birth_year: i32,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub portrait: String,
}

impl Author {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn born(mut self, year: i32, country: impl Into<String>) -> Self {
        self.birth_year = year;
        self.country = country.into();
        self
    }

    pub fn with_portrait(mut self, portrait: impl Into<String>) -> Self {
        self.portrait = portrait.into();
        self
    }
}

impl Record for Author {
    const COLLECTION: &'static str = "authors";
    fn id(&self) -> &str {
        &self.id
    }
}

/// A painting as stored. Carries the author by identifier only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Painting {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub author_id: String,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub image_url: String,
    #[serde(default, alias = "isFavorite")]
    pub is_favorite: bool,
    #[serde(default)]
    pub is_popular: bool,
}

impl Painting {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author_id: author_id.into(),
            ..Default::default()
        }
    }

    pub fn painted(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    pub fn favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }

    pub fn popular(mut self, is_popular: bool) -> Self {
        self.is_popular = is_popular;
        self
    }
}

impl Record for Painting {
    const COLLECTION: &'static str = "paintings";
    fn id(&self) -> &str {
        &self.id
    }
}

/// A trivia fact. Seed-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    pub id: String,
    pub text: String,
}

impl Fact {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

impl Record for Fact {
    const COLLECTION: &'static str = "facts";
    fn id(&self) -> &str {
        &self.id
    }
}
