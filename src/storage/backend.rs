//! Key-value store abstraction.
//!
//! This module defines the [`KeyValueStore`] trait, the single seam through
//! which the widget persists anything. The recency list is mirrored into one
//! string-keyed slot; the trait keeps that slot injectable so tests can swap in
//! a [`MemoryStore`](crate::storage::MemoryStore) instead of touching disk.

use crate::domain::error::Result;

/// Abstraction over string-keyed persistent slots.
///
/// # Implementations
///
/// - [`JsonFileStore`](crate::storage::JsonFileStore): JSON document on disk
///   with atomic writes
/// - [`MemoryStore`](crate::storage::MemoryStore): in-process map, used by
///   tests and as a fallback when the file store cannot be opened
///
/// # Examples
///
/// ```
/// use zuggest::storage::{KeyValueStore, MemoryStore};
///
/// let mut store = MemoryStore::default();
/// store.set("recentlySearched", "[]".to_string())?;
/// assert_eq!(store.get("recentlySearched")?.as_deref(), Some("[]"));
/// # Ok::<(), zuggest::ZuggestError>(())
/// ```
pub trait KeyValueStore: Send + std::fmt::Debug {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the slot has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write cannot be persisted.
    fn set(&mut self, key: &str, value: String) -> Result<()>;

    /// Deletes the slot stored under `key`. Deleting a missing slot is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the deletion cannot be persisted.
    fn remove(&mut self, key: &str) -> Result<()>;

    /// Deletes every slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the deletion cannot be persisted.
    fn clear(&mut self) -> Result<()>;
}
