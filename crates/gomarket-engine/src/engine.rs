//! # Cart Engine
//!
//! Owns the authoritative cart state and coordinates the three concerns the
//! rest of the app never sees together: serialized mutation, publishing, and
//! best-effort persistence.
//!
//! ## Thread Safety
//! The cart sits behind a `tokio::sync::Mutex` because:
//! 1. Mutations are read-modify-write cycles; two running concurrently would
//!    lose a write (both read the same prior collection, second publish wins)
//! 2. The persistence write is awaited inside the critical section, which
//!    also serializes snapshot writes - a stale snapshot can never overwrite
//!    a newer one
//! 3. Readers never touch the Mutex: they observe the watch channel
//!
//! ## Publish Before Persist
//! ```text
//! ┌────────────────────────────────────────────────────────────────────────┐
//! │  add_to_cart / increment / decrement                                   │
//! │                                                                        │
//! │  lock ── mutate ── send_replace(items) ── save(key, json) ── unlock    │
//! │                         │                      │                       │
//! │                         ▼                      ▼                       │
//! │                  subscribers react      Err? log + drop it:            │
//! │                  without waiting        the in-memory cart stays       │
//! │                  on storage I/O         the source of truth            │
//! └────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use tracing::{debug, info, warn};

use gomarket_core::{Cart, CartItem, CartTotals, CoreResult, ProductInfo, CART_STORAGE_KEY};
use gomarket_store::SnapshotStore;

// =============================================================================
// Cart Engine
// =============================================================================

/// The cart engine: single writer of cart state, shared by handle.
///
/// Construct one instance at application start with [`CartEngine::initialize`]
/// and pass it (wrapped in an `Arc` if needed) to every consumer. Consumers
/// subscribe to change notifications rather than polling.
pub struct CartEngine {
    /// Durable store the snapshot is read from and written to.
    store: Arc<dyn SnapshotStore>,

    /// The authoritative collection. Locked for the full read-modify-
    /// publish-persist cycle of each mutation.
    cart: Mutex<Cart>,

    /// Publishes the current collection to subscribers. A watch channel
    /// replays the latest value on subscribe, then delivers every update.
    products_tx: watch::Sender<Vec<CartItem>>,
}

impl CartEngine {
    /// Creates the engine and loads the persisted snapshot.
    ///
    /// ## Behavior
    /// - Snapshot present and valid: the cart is restored and published
    /// - Snapshot absent: empty cart
    /// - Storage unavailable or snapshot malformed: empty cart, logged -
    ///   a corrupt cart must not block application startup
    ///
    /// This is the only place deserialization occurs, which is why the
    /// constructor is infallible.
    pub async fn initialize(store: Arc<dyn SnapshotStore>) -> Self {
        let cart = Self::load_cart(store.as_ref()).await;
        let (products_tx, _) = watch::channel(cart.items().to_vec());

        CartEngine {
            store,
            cart: Mutex::new(cart),
            products_tx,
        }
    }

    /// Loads and validates the persisted snapshot, falling back to empty.
    async fn load_cart(store: &dyn SnapshotStore) -> Cart {
        let bytes = match store.load(CART_STORAGE_KEY).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                debug!("No cart snapshot found, starting empty");
                return Cart::new();
            }
            Err(e) => {
                warn!(error = %e, "Failed to load cart snapshot, starting empty");
                return Cart::new();
            }
        };

        // Malformed data is treated as absence, not an error
        let items: Vec<CartItem> = match serde_json::from_slice(&bytes) {
            Ok(items) => items,
            Err(e) => {
                warn!(error = %e, "Malformed cart snapshot, starting empty");
                return Cart::new();
            }
        };

        match Cart::from_snapshot(items) {
            Ok(cart) => {
                info!(entries = cart.len(), "Cart restored from snapshot");
                cart
            }
            Err(e) => {
                warn!(error = %e, "Cart snapshot violates invariants, starting empty");
                Cart::new()
            }
        }
    }

    /// Subscribes to the read-only products view.
    ///
    /// The receiver holds the latest collection immediately
    /// (replay-on-subscribe) and is notified of every subsequent change.
    pub fn subscribe(&self) -> watch::Receiver<Vec<CartItem>> {
        self.products_tx.subscribe()
    }

    /// Returns a point-in-time clone of the current collection.
    pub fn products(&self) -> Vec<CartItem> {
        self.products_tx.borrow().clone()
    }

    /// Returns the derived aggregates for the current collection.
    ///
    /// Computed on demand from the published collection, never stored.
    pub fn totals(&self) -> CartTotals {
        CartTotals::from(self.products_tx.borrow().as_slice())
    }

    /// Adds a product to the cart (merge-on-add).
    ///
    /// ## Behavior
    /// - Id already in cart: that entry's quantity + 1; the incoming
    ///   descriptor's title/price/image are ignored on merge
    /// - Id unseen: appended with quantity 1
    /// - The new collection is published before the snapshot write starts
    /// - A persistence failure is logged and swallowed, never reverted
    pub async fn add_to_cart(&self, product: ProductInfo) {
        let mut cart = self.cart.lock().await;

        debug!(id = %product.id, "add_to_cart");
        cart.add(product);

        self.publish_and_persist(&cart).await;
    }

    /// Increases the quantity of an existing entry by 1.
    ///
    /// ## Errors
    /// `ProductNotFound` if the id is absent - the UI only calls this for
    /// ids it rendered from the collection, so an unknown id is an internal
    /// invariant violation. It is raised explicitly (rather than no-opped)
    /// so tests can observe it; nothing is published or persisted.
    pub async fn increment(&self, id: &str) -> CoreResult<()> {
        let mut cart = self.cart.lock().await;

        debug!(id = %id, "increment");
        cart.increment(id)?;

        self.publish_and_persist(&cart).await;
        Ok(())
    }

    /// Decreases the quantity of an existing entry by 1.
    ///
    /// An entry reaching quantity 0 is removed from the collection entirely.
    /// Same not-found handling as [`increment`](Self::increment).
    pub async fn decrement(&self, id: &str) -> CoreResult<()> {
        let mut cart = self.cart.lock().await;

        debug!(id = %id, "decrement");
        cart.decrement(id)?;

        self.publish_and_persist(&cart).await;
        Ok(())
    }

    /// Publishes the collection, then writes the snapshot.
    ///
    /// Called with the cart lock held. Publishing happens first so observers
    /// see the change without waiting on storage I/O; the save is awaited
    /// afterwards and its failure only logged (best-effort durability).
    async fn publish_and_persist(&self, cart: &Cart) {
        self.products_tx.send_replace(cart.items().to_vec());

        let snapshot = match serde_json::to_vec(cart.items()) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(error = %e, "Failed to serialize cart snapshot");
                return;
            }
        };

        if let Err(e) = self.store.save(CART_STORAGE_KEY, snapshot).await {
            warn!(error = %e, "Failed to persist cart snapshot, keeping in-memory state");
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use gomarket_core::CoreError;
    use gomarket_store::{MemoryStore, StoreError, StoreResult};

    fn product(id: &str, price: f64) -> ProductInfo {
        ProductInfo {
            id: id.to_string(),
            title: format!("Product {}", id),
            image_url: format!("https://cdn.gomarket.dev/{}.png", id),
            price,
        }
    }

    async fn engine_with_memory_store() -> (CartEngine, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let engine = CartEngine::initialize(store.clone()).await;
        (engine, store)
    }

    /// Store that refuses every operation, for failure-absorption tests.
    struct FailingStore;

    #[async_trait]
    impl SnapshotStore for FailingStore {
        async fn load(&self, _key: &str) -> StoreResult<Option<Vec<u8>>> {
            Err(StoreError::Unavailable("injected failure".to_string()))
        }

        async fn save(&self, _key: &str, _value: Vec<u8>) -> StoreResult<()> {
            Err(StoreError::Full)
        }
    }

    #[tokio::test]
    async fn test_starts_empty_without_snapshot() {
        let (engine, _) = engine_with_memory_store().await;

        assert!(engine.products().is_empty());
        assert_eq!(engine.totals().total_quantity, 0);
        assert_eq!(engine.totals().total_price, 0.0);
    }

    #[tokio::test]
    async fn test_add_publishes_before_caller_observes() {
        let (engine, _) = engine_with_memory_store().await;

        engine.add_to_cart(product("a", 10.0)).await;

        let products = engine.products();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, "a");
        assert_eq!(products[0].quantity, 1);
    }

    #[tokio::test]
    async fn test_repeat_add_merges_instead_of_duplicating() {
        let (engine, _) = engine_with_memory_store().await;

        engine.add_to_cart(product("a", 10.0)).await;
        engine.add_to_cart(product("a", 10.0)).await;

        let products = engine.products();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].quantity, 2);
        assert_eq!(engine.totals().total_price, 20.0);
    }

    #[tokio::test]
    async fn test_full_scenario() {
        // start empty → add(a) ×2 → decrement(a) ×2 → empty again
        let (engine, _) = engine_with_memory_store().await;

        engine.add_to_cart(product("a", 10.0)).await;
        assert_eq!(engine.totals().total_quantity, 1);
        assert_eq!(engine.totals().total_price, 10.0);

        engine.add_to_cart(product("a", 10.0)).await;
        assert_eq!(engine.totals().total_price, 20.0);

        engine.decrement("a").await.unwrap();
        assert_eq!(engine.products()[0].quantity, 1);

        engine.decrement("a").await.unwrap();
        assert!(engine.products().is_empty());
        assert_eq!(engine.totals().total_quantity, 0);
        assert_eq!(engine.totals().total_price, 0.0);
    }

    #[tokio::test]
    async fn test_increment_and_decrement_unknown_id_error_without_publishing() {
        let (engine, store) = engine_with_memory_store().await;
        engine.add_to_cart(product("a", 10.0)).await;

        let err = engine.increment("ghost").await.unwrap_err();
        assert_eq!(err, CoreError::ProductNotFound("ghost".to_string()));

        let err = engine.decrement("ghost").await.unwrap_err();
        assert_eq!(err, CoreError::ProductNotFound("ghost".to_string()));

        // State and snapshot untouched by the failed operations
        assert_eq!(engine.products().len(), 1);
        assert_eq!(engine.products()[0].quantity, 1);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_persistence_round_trip_across_engines() {
        let store = Arc::new(MemoryStore::new());

        let engine = CartEngine::initialize(store.clone()).await;
        engine.add_to_cart(product("a", 10.0)).await;
        engine.add_to_cart(product("b", 2.5)).await;
        engine.increment("b").await.unwrap();
        let published = engine.products();
        drop(engine);

        // A fresh engine over the same store restores the last collection
        let restored = CartEngine::initialize(store).await;
        assert_eq!(restored.products(), published);
        assert_eq!(restored.totals().total_quantity, 3);
    }

    #[tokio::test]
    async fn test_decrement_to_zero_is_persisted_as_removal() {
        let store = Arc::new(MemoryStore::new());

        let engine = CartEngine::initialize(store.clone()).await;
        engine.add_to_cart(product("a", 10.0)).await;
        engine.decrement("a").await.unwrap();
        drop(engine);

        let restored = CartEngine::initialize(store).await;
        assert!(restored.products().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_snapshot_starts_empty() {
        let store = Arc::new(MemoryStore::new());
        store
            .save(CART_STORAGE_KEY, b"not json at all".to_vec())
            .await
            .unwrap();

        let engine = CartEngine::initialize(store).await;
        assert!(engine.products().is_empty());
    }

    #[tokio::test]
    async fn test_invariant_violating_snapshot_starts_empty() {
        let store = Arc::new(MemoryStore::new());
        // Valid JSON, but a zero quantity violates the cart invariants
        let snapshot =
            br#"[{"id":"a","title":"A","image_url":"u","price":1.0,"quantity":0}]"#.to_vec();
        store.save(CART_STORAGE_KEY, snapshot).await.unwrap();

        let engine = CartEngine::initialize(store).await;
        assert!(engine.products().is_empty());
    }

    #[tokio::test]
    async fn test_storage_failures_are_absorbed() {
        // Load fails: engine still starts, empty
        let engine = CartEngine::initialize(Arc::new(FailingStore)).await;
        assert!(engine.products().is_empty());

        // Save fails: mutations still land in memory, no error surfaces
        engine.add_to_cart(product("a", 10.0)).await;
        engine.increment("a").await.unwrap();
        engine.decrement("a").await.unwrap();

        assert_eq!(engine.products()[0].quantity, 1);
    }

    #[tokio::test]
    async fn test_subscribe_replays_current_value_then_updates() {
        let (engine, _) = engine_with_memory_store().await;
        engine.add_to_cart(product("a", 10.0)).await;

        // Replay-on-subscribe: latest value is available immediately
        let mut rx = engine.subscribe();
        assert_eq!(rx.borrow().len(), 1);

        engine.add_to_cart(product("b", 5.0)).await;

        rx.changed().await.unwrap();
        let products = rx.borrow_and_update().clone();
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].id, "b");
    }

    #[tokio::test]
    async fn test_concurrent_adds_lose_no_writes() {
        let store = Arc::new(MemoryStore::new());
        let engine = Arc::new(CartEngine::initialize(store).await);

        let mut handles = Vec::new();
        for _ in 0..10 {
            let engine = engine.clone();
            handles.push(tokio::spawn(async move {
                engine.add_to_cart(product("a", 1.0)).await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        // Mutations are serialized on the engine mutex: all ten adds count
        assert_eq!(engine.products().len(), 1);
        assert_eq!(engine.products()[0].quantity, 10);
    }
}
