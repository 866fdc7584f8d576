//! InMemoryDocumentStore - Byte-buffer document store for testing and embedding.

use std::io;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use super::{CatalogDocument, DocumentStore, PersistenceError};

const LOCATION: &str = "memory";

struct Shared {
    bytes: RwLock<Option<Vec<u8>>>,
    fail_writes: AtomicBool,
    saves: AtomicUsize,
}

/// In-memory document store.
///
/// The document is kept serialized, so loads go through the same decode path
/// as the file store. Clone-friendly via Arc.
#[derive(Clone)]
pub struct InMemoryDocumentStore {
    shared: Arc<Shared>,
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryDocumentStore {
    /// Create an empty store. The first `load` reports `NotFound`.
    pub fn new() -> Self {
        Self::from_bytes(None)
    }

    /// Create a store that already holds `document`.
    pub fn with_document(document: &CatalogDocument) -> Result<Self, PersistenceError> {
        let bytes = serde_json::to_vec(document).map_err(PersistenceError::Encode)?;
        Ok(Self::from_bytes(Some(bytes)))
    }

    /// Create a store holding raw bytes, valid or not.
    pub fn with_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::from_bytes(Some(bytes.into()))
    }

    fn from_bytes(bytes: Option<Vec<u8>>) -> Self {
        Self {
            shared: Arc::new(Shared {
                bytes: RwLock::new(bytes),
                fail_writes: AtomicBool::new(false),
                saves: AtomicUsize::new(0),
            }),
        }
    }

    /// Make subsequent saves fail with an I/O error.
    pub fn set_fail_writes(&self, fail: bool) {
        self.shared.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful saves so far.
    pub fn saves(&self) -> usize {
        self.shared.saves.load(Ordering::SeqCst)
    }

    fn lock_error() -> PersistenceError {
        PersistenceError::Io {
            location: LOCATION.into(),
            source: io::Error::other("lock poisoned"),
        }
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn load(&self) -> Result<CatalogDocument, PersistenceError> {
        let bytes = self.shared.bytes.read().map_err(|_| Self::lock_error())?;
        match bytes.as_deref() {
            Some(bytes) => {
                serde_json::from_slice(bytes).map_err(|source| PersistenceError::Corrupt {
                    location: LOCATION.into(),
                    source,
                })
            }
            None => Err(PersistenceError::NotFound {
                location: LOCATION.into(),
            }),
        }
    }

    fn save(&self, document: &CatalogDocument) -> Result<(), PersistenceError> {
        if self.shared.fail_writes.load(Ordering::SeqCst) {
            return Err(PersistenceError::Io {
                location: LOCATION.into(),
                source: io::Error::other("writes disabled"),
            });
        }

        let encoded = serde_json::to_vec(document).map_err(PersistenceError::Encode)?;
        let mut bytes = self.shared.bytes.write().map_err(|_| Self::lock_error())?;
        *bytes = Some(encoded);
        self.shared.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
