//! JsonFileStore - The catalog document as a pretty-printed JSON file.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use super::{CatalogDocument, DocumentStore, PersistenceError};

/// File-backed document store.
///
/// Saves go to a sibling temp file which is then renamed over the target,
/// so readers never see a half-written document. Saves through clones of
/// one store are serialized, since they share the temp file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn io_error(&self, source: io::Error) -> PersistenceError {
        PersistenceError::Io {
            location: self.location(),
            source,
        }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_and_rename(&self, tmp_path: &Path, bytes: &[u8]) -> io::Result<()> {
        let mut file = fs::File::create(tmp_path)?;
        file.write_all(bytes)?;
        file.sync_all()?;
        drop(file);
        fs::rename(tmp_path, &self.path)
    }
}

impl DocumentStore for JsonFileStore {
    fn load(&self) -> Result<CatalogDocument, PersistenceError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(PersistenceError::NotFound {
                    location: self.location(),
                })
            }
            Err(e) => return Err(self.io_error(e)),
        };

        serde_json::from_slice(&bytes).map_err(|source| PersistenceError::Corrupt {
            location: self.location(),
            source,
        })
    }

    fn save(&self, document: &CatalogDocument) -> Result<(), PersistenceError> {
        let bytes = serde_json::to_vec_pretty(document).map_err(|e| {
            warn!(error = %e, "failed to encode catalog document");
            PersistenceError::Encode(e)
        })?;

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;
        }

        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| self.io_error(io::Error::other("write lock poisoned")))?;

        let tmp_path = self.tmp_path();
        if let Err(e) = self.write_and_rename(&tmp_path, &bytes) {
            let _ = fs::remove_file(&tmp_path);
            warn!(path = %self.path.display(), error = %e, "failed to write catalog document");
            return Err(self.io_error(e));
        }

        debug!(path = %self.path.display(), bytes = bytes.len(), "catalog document written");
        Ok(())
    }
}
