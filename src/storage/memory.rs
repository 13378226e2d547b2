//! In-memory key-value store.

use crate::domain::error::Result;
use crate::storage::backend::KeyValueStore;
use std::collections::BTreeMap;

/// Volatile [`KeyValueStore`] backed by a `BTreeMap`.
///
/// Nothing survives the process. Used by tests and when the file store
/// cannot be opened.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Creates a store holding a single slot.
    #[must_use]
    pub fn with_slot(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut slots = BTreeMap::new();
        slots.insert(key.into(), value.into());
        Self { slots }
    }

    /// Number of slots currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no slot has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        tracing::trace!(key = %key, value_len = value.len(), "memory store write");
        self.slots.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.slots.remove(key);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.slots.clear();
        Ok(())
    }
}

/// Memory store whose writes start failing once its switch is flipped.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct FaultyStore {
    inner: MemoryStore,
    fail_writes: std::sync::Arc<std::sync::atomic::AtomicBool>,
}

#[cfg(test)]
impl FaultyStore {
    /// Returns the store and a handle that toggles write failures.
    pub(crate) fn new() -> (Self, std::sync::Arc<std::sync::atomic::AtomicBool>) {
        let store = Self::default();
        let switch = std::sync::Arc::clone(&store.fail_writes);
        (store, switch)
    }

    fn check(&self) -> Result<()> {
        if self.fail_writes.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(crate::domain::error::ZuggestError::Storage(
                "quota exceeded".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
impl KeyValueStore for FaultyStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.check()?;
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.check()?;
        self.inner.remove(key)
    }

    fn clear(&mut self) -> Result<()> {
        self.check()?;
        self.inner.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_previous_value() {
        let mut store = MemoryStore::default();
        store.set("k", "a".to_string()).unwrap();
        store.set("k", "b".to_string()).unwrap();

        assert_eq!(store.get("k").unwrap().as_deref(), Some("b"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_and_clear() {
        let mut store = MemoryStore::default();
        store.set("a", "1".to_string()).unwrap();
        store.set("b", "2".to_string()).unwrap();

        store.remove("a").unwrap();
        store.remove("missing").unwrap();
        assert_eq!(store.get("a").unwrap(), None);
        assert_eq!(store.len(), 1);

        store.clear().unwrap();
        assert!(store.is_empty());
    }
}
