//! # gomarket-engine: The Cart Engine
//!
//! The orchestration layer of the GoMarket cart: one [`CartEngine`] instance
//! is constructed at application start and handed to every consumer.
//!
//! ## Control Flow
//! ```text
//! ┌────────────────────────────────────────────────────────────────────────┐
//! │                        Cart Engine Data Flow                           │
//! │                                                                        │
//! │  Startup:   store.load(key) ──► deserialize ──► publish initial cart   │
//! │             (absent or malformed snapshot ──► empty cart, no error)    │
//! │                                                                        │
//! │  Mutation:  add_to_cart / increment / decrement                        │
//! │                  │                                                     │
//! │                  ▼  (async Mutex - one mutation at a time)             │
//! │             compute new collection                                     │
//! │                  │                                                     │
//! │                  ▼                                                     │
//! │             publish via watch channel  ◄── consumers see this          │
//! │                  │                         immediately                 │
//! │                  ▼                                                     │
//! │             store.save(key, snapshot)  ◄── best-effort: failures       │
//! │                                            logged, never surfaced     │
//! └────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use gomarket_engine::CartEngine;
//! use gomarket_store::{SqliteStore, StoreConfig};
//!
//! let store = Arc::new(SqliteStore::new(StoreConfig::new("./cart.db")).await?);
//! let engine = CartEngine::initialize(store).await;
//!
//! let mut products = engine.subscribe();
//! engine.add_to_cart(descriptor).await;
//! // products.borrow() now reflects the new collection
//! ```

pub mod engine;

pub use engine::CartEngine;

// Consumers of the engine need the core types and the store contract;
// re-export them so a frontend crate only depends on gomarket-engine.
pub use gomarket_core::{Cart, CartItem, CartTotals, CoreError, CoreResult, ProductInfo};
pub use gomarket_store::{MemoryStore, SnapshotStore, SqliteStore, StoreConfig};
