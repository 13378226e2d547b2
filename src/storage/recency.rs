//! Session-scoped list of recently committed searches.
//!
//! The list behaves as an ordered set: insertion order is preserved and each
//! string appears at most once. Every mutation re-serializes the whole list as
//! a JSON array into one slot of the injected [`KeyValueStore`]. The slot is
//! reset to `[]` when the store is mounted and is never read back, so recency
//! does not outlive the widget.

use crate::domain::error::Result;
use crate::storage::backend::KeyValueStore;
use crate::storage::memory::MemoryStore;

/// Default slot name for the mirrored list.
pub const DEFAULT_RECENCY_KEY: &str = "recentlySearched";

/// Ordered set of recently searched strings mirrored into a key-value slot.
pub struct RecencyStore {
    entries: Vec<String>,
    backend: Box<dyn KeyValueStore>,
    key: String,
}

impl RecencyStore {
    /// Mounts the store: takes the backend and resets the slot to an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the empty list cannot be written.
    ///
    /// # Examples
    ///
    /// ```
    /// use zuggest::storage::{MemoryStore, RecencyStore};
    ///
    /// let mut recency = RecencyStore::mount(Box::new(MemoryStore::default()), "recentlySearched")?;
    /// assert!(recency.add("Banana")?);
    /// assert!(!recency.add("Banana")?);
    /// assert_eq!(recency.entries(), ["Banana"]);
    /// # Ok::<(), zuggest::ZuggestError>(())
    /// ```
    pub fn mount(backend: Box<dyn KeyValueStore>, key: impl Into<String>) -> Result<Self> {
        let mut store = Self {
            entries: Vec::new(),
            backend,
            key: key.into(),
        };

        tracing::debug!(key = %store.key, "resetting recency slot on mount");
        store.persist()?;
        Ok(store)
    }

    /// Mounts over a fresh [`MemoryStore`] whose slot already holds `[]`.
    ///
    /// Infallible counterpart of [`RecencyStore::mount`], used when no
    /// persistent backend is available.
    #[must_use]
    pub fn volatile(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            entries: Vec::new(),
            backend: Box::new(MemoryStore::with_slot(key.clone(), "[]")),
            key,
        }
    }

    /// Appends `value` unless it is already present.
    ///
    /// Returns `true` if the list changed (and was persisted).
    ///
    /// # Errors
    ///
    /// Returns an error if the updated list cannot be persisted. The value is
    /// not kept in that case, so a later `add` writes the slot again.
    pub fn add(&mut self, value: &str) -> Result<bool> {
        if self.contains(value) {
            tracing::trace!(value = %value, "already in recency list");
            return Ok(false);
        }

        self.entries.push(value.to_string());
        if let Err(e) = self.persist() {
            self.entries.pop();
            return Err(e);
        }

        tracing::debug!(value = %value, count = self.entries.len(), "added to recency list");
        Ok(true)
    }

    /// Removes every occurrence of `value` and persists the result.
    ///
    /// Returns `true` if anything was removed. Removing an absent value leaves
    /// the list and the slot untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be persisted; the entries are then
    /// restored.
    pub fn remove(&mut self, value: &str) -> Result<bool> {
        if !self.contains(value) {
            tracing::trace!(value = %value, "not in recency list");
            return Ok(false);
        }

        let previous = self.entries.clone();
        self.entries.retain(|entry| entry != value);
        if let Err(e) = self.persist() {
            self.entries = previous;
            return Err(e);
        }

        tracing::debug!(value = %value, count = self.entries.len(), "removed from recency list");
        Ok(true)
    }

    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.entries.iter().any(|entry| entry == value)
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Slot name the list is mirrored into.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read-only view of the backing store.
    #[must_use]
    pub fn backend(&self) -> &dyn KeyValueStore {
        self.backend.as_ref()
    }

    fn persist(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.entries)?;
        self.backend.set(&self.key, json)
    }
}

impl std::fmt::Debug for RecencyStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecencyStore")
            .field("entries", &self.entries)
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ZuggestError;
    use crate::storage::memory::FaultyStore;

    fn mounted() -> RecencyStore {
        RecencyStore::mount(Box::new(MemoryStore::default()), DEFAULT_RECENCY_KEY).unwrap()
    }

    fn slot(store: &RecencyStore) -> Option<String> {
        store.backend().get(store.key()).unwrap()
    }

    #[test]
    fn mount_resets_existing_slot() {
        let mut backend = MemoryStore::default();
        backend
            .set(DEFAULT_RECENCY_KEY, r#"["stale"]"#.to_string())
            .unwrap();

        let store = RecencyStore::mount(Box::new(backend), DEFAULT_RECENCY_KEY).unwrap();

        assert!(store.entries().is_empty());
        assert_eq!(slot(&store).as_deref(), Some("[]"));
    }

    #[test]
    fn volatile_store_starts_with_empty_slot() {
        let store = RecencyStore::volatile(DEFAULT_RECENCY_KEY);
        assert_eq!(slot(&store).as_deref(), Some("[]"));
    }

    #[test]
    fn add_has_set_semantics_and_keeps_order() {
        let mut store = mounted();

        assert!(store.add("Banana").unwrap());
        assert!(store.add("Apple").unwrap());
        assert!(!store.add("Banana").unwrap());

        assert_eq!(store.entries(), ["Banana", "Apple"]);
        assert_eq!(slot(&store).as_deref(), Some(r#"["Banana","Apple"]"#));
    }

    #[test]
    fn remove_absent_value_is_noop() {
        let mut store = mounted();
        store.add("Banana").unwrap();

        assert!(!store.remove("Cherry").unwrap());
        assert_eq!(store.entries(), ["Banana"]);
    }

    #[test]
    fn remove_absent_value_skips_the_write() {
        let (backend, fail_writes) = FaultyStore::new();
        let mut store = RecencyStore::mount(Box::new(backend), DEFAULT_RECENCY_KEY).unwrap();
        fail_writes.store(true, std::sync::atomic::Ordering::SeqCst);

        assert!(!store.remove("Cherry").unwrap());
    }

    #[test]
    fn failed_add_is_rolled_back_and_retried() {
        let (backend, fail_writes) = FaultyStore::new();
        let mut store = RecencyStore::mount(Box::new(backend), DEFAULT_RECENCY_KEY).unwrap();

        fail_writes.store(true, std::sync::atomic::Ordering::SeqCst);
        assert!(store.add("Banana").is_err());
        assert!(store.entries().is_empty());
        assert_eq!(slot(&store).as_deref(), Some("[]"));

        fail_writes.store(false, std::sync::atomic::Ordering::SeqCst);
        assert!(store.add("Banana").unwrap());
        assert_eq!(slot(&store).as_deref(), Some(r#"["Banana"]"#));
    }

    #[test]
    fn failed_remove_restores_entries() {
        let (backend, fail_writes) = FaultyStore::new();
        let mut store = RecencyStore::mount(Box::new(backend), DEFAULT_RECENCY_KEY).unwrap();
        store.add("Banana").unwrap();
        store.add("Apple").unwrap();

        fail_writes.store(true, std::sync::atomic::Ordering::SeqCst);
        assert!(store.remove("Banana").is_err());
        assert_eq!(store.entries(), ["Banana", "Apple"]);
    }

    #[test]
    fn remove_persists_and_updates_membership() {
        let mut store = mounted();
        store.add("Banana").unwrap();
        store.add("Apple").unwrap();

        assert!(store.contains("Banana"));
        assert!(store.remove("Banana").unwrap());
        assert!(!store.contains("Banana"));
        assert_eq!(slot(&store).as_deref(), Some(r#"["Apple"]"#));
    }

    #[test]
    fn membership_is_exact_string_equality() {
        let mut store = mounted();
        store.add("Banana").unwrap();

        assert!(!store.contains("banana"));
        assert!(!store.contains("Ban"));
    }

    #[derive(Debug)]
    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }
        fn set(&mut self, _key: &str, _value: String) -> Result<()> {
            Err(ZuggestError::Storage("quota exceeded".to_string()))
        }
        fn remove(&mut self, _key: &str) -> Result<()> {
            Ok(())
        }
        fn clear(&mut self) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn persistence_failures_propagate() {
        let err = RecencyStore::mount(Box::new(FailingStore), DEFAULT_RECENCY_KEY).unwrap_err();
        assert!(matches!(err, ZuggestError::Storage(_)));
    }
}
