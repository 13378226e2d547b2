//! JSON file-based key-value store.
//!
//! All slots live in one human-readable JSON document. Writes go to a
//! temporary file that is then renamed over the target, so a crash never
//! leaves a half-written document behind.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "slots": {
//!     "recentlySearched": "[\"Banana\"]"
//!   }
//! }
//! ```

use crate::domain::error::{Result, ZuggestError};
use crate::storage::backend::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Current document version.
const STORE_VERSION: u32 = 1;

/// On-disk document.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreDocument {
    version: u32,
    #[serde(default)]
    slots: BTreeMap<String, String>,
}

impl Default for StoreDocument {
    fn default() -> Self {
        Self {
            version: STORE_VERSION,
            slots: BTreeMap::new(),
        }
    }
}

/// JSON file key-value store.
///
/// The whole document is kept in memory and rewritten on every mutation.
/// This type is `Send` but not `Sync`; the plugin only touches it from its
/// single event thread.
#[derive(Debug)]
pub struct JsonFileStore {
    /// Path to the JSON document on disk.
    file_path: PathBuf,

    /// In-memory copy of the document.
    document: StoreDocument,

    /// Set when the in-memory document differs from disk.
    dirty: bool,
}

impl JsonFileStore {
    /// Opens the store at `file_path`, creating parent directories as needed.
    ///
    /// An existing document is loaded; a missing one starts empty and is only
    /// written on the first mutation.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - The file exists but is not a valid store document
    /// - The file cannot be read
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use zuggest::storage::JsonFileStore;
    /// use std::path::PathBuf;
    ///
    /// let store = JsonFileStore::open(PathBuf::from("/data/zuggest.json"))?;
    /// # Ok::<(), zuggest::ZuggestError>(())
    /// ```
    pub fn open(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "opening JSON key-value store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let document = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("no existing document, starting empty");
            StoreDocument::default()
        };

        tracing::debug!(slot_count = document.slots.len(), "store opened");

        Ok(Self {
            file_path,
            document,
            dirty: false,
        })
    }

    /// Opens the store like [`JsonFileStore::open`], but starts from an empty
    /// document when the existing one is unreadable or has another version.
    ///
    /// The replacement is marked dirty, so the next write or drop rewrites the
    /// file with a valid document.
    ///
    /// # Errors
    ///
    /// Returns an error only for I/O failures, such as an uncreatable parent
    /// directory.
    pub fn open_or_reset(file_path: PathBuf) -> Result<Self> {
        match Self::open(file_path.clone()) {
            Err(ZuggestError::Storage(reason)) => {
                tracing::warn!(path = ?file_path, reason = %reason, "discarding unreadable store document");
                Ok(Self {
                    file_path,
                    document: StoreDocument::default(),
                    dirty: true,
                })
            }
            other => other,
        }
    }

    /// Path of the backing document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<StoreDocument> {
        let contents = std::fs::read_to_string(path)?;
        let document: StoreDocument = serde_json::from_str(&contents)
            .map_err(|e| ZuggestError::Storage(format!("failed to parse store document: {e}")))?;

        if document.version != STORE_VERSION {
            return Err(ZuggestError::Storage(format!(
                "unsupported store version {} (expected {STORE_VERSION})",
                document.version
            )));
        }

        Ok(document)
    }

    /// Writes the document to disk via temp file + rename.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&self.document)?;
        let tmp_path = self.file_path.with_extension("tmp");

        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "store saved");
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.document.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        let _span = tracing::debug_span!("json_store_set", key = %key, value_len = value.len()).entered();

        self.document.slots.insert(key.to_string(), value);
        self.dirty = true;
        self.save_to_file()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_store_remove", key = %key).entered();

        if self.document.slots.remove(key).is_some() {
            self.dirty = true;
        }
        self.save_to_file()
    }

    fn clear(&mut self) -> Result<()> {
        let _span = tracing::debug_span!("json_store_clear", slot_count = self.document.slots.len()).entered();

        if !self.document.slots.is_empty() {
            self.document.slots.clear();
            self.dirty = true;
        }
        self.save_to_file()
    }
}

impl Drop for JsonFileStore {
    fn drop(&mut self) {
        if self.dirty {
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save store on drop");
            }
        }
    }
}
