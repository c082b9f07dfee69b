//! # gomarket-store: Snapshot Persistence for GoMarket Cart
//!
//! This crate provides the durable store the cart engine depends on: a
//! minimal asynchronous key-value interface plus two backends.
//!
//! ## Architecture Position
//! ```text
//! ┌────────────────────────────────────────────────────────────────────────┐
//! │                     GoMarket Cart Data Flow                            │
//! │                                                                        │
//! │  CartEngine mutation (add / increment / decrement)                     │
//! │       │                                                                │
//! │       ▼                                                                │
//! │  ┌────────────────────────────────────────────────────────────────┐   │
//! │  │                  gomarket-store (THIS CRATE)                   │   │
//! │  │                                                                │   │
//! │  │   ┌───────────────┐   ┌───────────────┐   ┌───────────────┐   │   │
//! │  │   │ SnapshotStore │   │  SqliteStore  │   │  MemoryStore  │   │   │
//! │  │   │   (store.rs)  │   │  (sqlite.rs)  │   │  (memory.rs)  │   │   │
//! │  │   │               │   │               │   │               │   │   │
//! │  │   │ load / save   │◄──│ sqlx pool,    │   │ HashMap, for  │   │   │
//! │  │   │ one record    │   │ migrations    │   │ tests         │   │   │
//! │  │   └───────────────┘   └───────────────┘   └───────────────┘   │   │
//! │  └────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                │
//! │       ▼                                                                │
//! │  SQLite file: <data dir>/gomarket/cart.db (snapshots table)            │
//! └────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The [`SnapshotStore`] trait the engine consumes
//! - [`sqlite`] - SQLite-backed store with pooling and embedded migrations
//! - [`memory`] - In-process store for tests and development
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gomarket_store::{SnapshotStore, SqliteStore, StoreConfig};
//!
//! let store = SqliteStore::new(StoreConfig::new("path/to/cart.db")).await?;
//!
//! store.save("@gomarket:products", b"[]".to_vec()).await?;
//! let snapshot = store.load("@gomarket:products").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod memory;
pub mod migrations;
pub mod sqlite;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use sqlite::{SqliteStore, StoreConfig};
pub use store::SnapshotStore;
