//! # Snapshot Store Trait
//!
//! The asynchronous key-value contract the cart engine consumes. The engine
//! treats durable storage as a capability it depends on, not something it
//! implements: any backend that can load and save one opaque record per key
//! will do.
//!
//! ## Contract
//! ```text
//! ┌────────────────────────────────────────────────────────────────────────┐
//! │                        SnapshotStore Contract                          │
//! │                                                                        │
//! │  load(key)  ──► Ok(Some(bytes))   record exists                        │
//! │             ──► Ok(None)          record absent (NOT an error)         │
//! │             ──► Err(Unavailable)  storage could not be read            │
//! │                                                                        │
//! │  save(key, bytes) ──► Ok(())            write acknowledged             │
//! │                   ──► Err(Unavailable)  storage could not be written   │
//! │                   ──► Err(Full)         no room for the record         │
//! │                                                                        │
//! │  Absence is a sum type (Option), never an empty-bytes sentinel.        │
//! └────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;

use crate::error::StoreResult;

/// Minimal asynchronous key-value store for serialized snapshots.
///
/// Implementations must be `Send + Sync`: the engine holds the store behind
/// an `Arc<dyn SnapshotStore>` and calls it from async tasks.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Loads the record stored under `key`.
    ///
    /// Returns `Ok(None)` when no record exists - absence is an expected
    /// outcome (first launch), not a failure.
    async fn load(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Stores `value` under `key`, replacing any previous record.
    async fn save(&self, key: &str, value: Vec<u8>) -> StoreResult<()>;
}
