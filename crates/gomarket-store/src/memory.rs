//! # In-Memory Snapshot Store
//!
//! HashMap-backed implementation of [`SnapshotStore`] for tests and
//! development. Nothing survives the process; use [`SqliteStore`] for the
//! real thing.
//!
//! [`SqliteStore`]: crate::sqlite::SqliteStore

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::store::SnapshotStore;

/// In-process snapshot store.
///
/// ## Thread Safety
/// A `std::sync::Mutex` is enough here: the map is only touched inside
/// non-async critical sections, no lock is ever held across an await.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Returns the number of stored records (for test assertions).
    pub fn len(&self) -> usize {
        self.entries.lock().expect("store mutex poisoned").len()
    }

    /// Checks if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SnapshotStore for MemoryStore {
    async fn load(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let entries = self.entries.lock().expect("store mutex poisoned");
        Ok(entries.get(key).cloned())
    }

    async fn save(&self, key: &str, value: Vec<u8>) -> StoreResult<()> {
        let mut entries = self.entries.lock().expect("store mutex poisoned");
        entries.insert(key.to_string(), value);
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_missing_key_returns_none() {
        let store = MemoryStore::new();

        assert_eq!(store.load("missing").await.unwrap(), None);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let store = MemoryStore::new();

        store.save("k", b"payload".to_vec()).await.unwrap();

        assert_eq!(store.load("k").await.unwrap(), Some(b"payload".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_record() {
        let store = MemoryStore::new();

        store.save("k", b"old".to_vec()).await.unwrap();
        store.save("k", b"new".to_vec()).await.unwrap();

        assert_eq!(store.load("k").await.unwrap(), Some(b"new".to_vec()));
        assert_eq!(store.len(), 1);
    }
}
