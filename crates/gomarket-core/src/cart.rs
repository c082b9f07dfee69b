//! # Cart Collection
//!
//! The ordered, id-unique collection of cart entries and its mutation rules.
//!
//! ## Mutation Rules
//! ```text
//! ┌────────────────────────────────────────────────────────────────────────┐
//! │                        Cart Mutation Rules                             │
//! │                                                                        │
//! │  add(descriptor)                                                       │
//! │      │                                                                 │
//! │      ├── id already present? ──► quantity + 1 on the STORED entry      │
//! │      │                           (incoming title/price/image ignored)  │
//! │      │                                                                 │
//! │      └── id unseen? ───────────► append entry with quantity 1          │
//! │                                                                        │
//! │  increment(id) ──► quantity + 1          (error if id absent)          │
//! │                                                                        │
//! │  decrement(id) ──► quantity - 1                                        │
//! │      │                                                                 │
//! │      └── quantity hit 0? ──────► remove the entry in place             │
//! │                                                                        │
//! └────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - `quantity >= 1` for every entry; an entry reaching 0 is removed
//! - No two entries share an id
//! - Insertion order is preserved across mutations except removal

use crate::error::{CoreError, CoreResult};
use crate::types::{CartItem, CartTotals, ProductInfo};

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: an ordered sequence of [`CartItem`]s keyed by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Rebuilds a cart from a deserialized snapshot, validating invariants.
    ///
    /// ## Why Validate Here
    /// The snapshot is the only data that enters the cart from outside the
    /// mutation rules. A snapshot violating the invariants (duplicate ids,
    /// zero quantities, negative prices) is malformed; the engine treats
    /// the error as "snapshot absent" and starts empty.
    pub fn from_snapshot(items: Vec<CartItem>) -> CoreResult<Self> {
        for (i, item) in items.iter().enumerate() {
            if item.quantity == 0 {
                return Err(CoreError::ZeroQuantity(item.id.clone()));
            }
            if item.price < 0.0 {
                return Err(CoreError::NegativePrice(item.id.clone()));
            }
            if items[..i].iter().any(|other| other.id == item.id) {
                return Err(CoreError::DuplicateProduct(item.id.clone()));
            }
        }

        Ok(Cart { items })
    }

    /// Adds a product to the cart (merge-on-add).
    ///
    /// ## Behavior
    /// - If the id is already in the cart: increases that entry's quantity
    ///   by 1. All other fields stay as stored - only identity matters for
    ///   a repeat add, the incoming descriptor is otherwise ignored.
    /// - If the id is unseen: appends a new entry with quantity 1.
    pub fn add(&mut self, product: ProductInfo) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == product.id) {
            item.quantity += 1;
            return;
        }

        self.items.push(product.into_item());
    }

    /// Increases the quantity of an existing entry by 1.
    pub fn increment(&mut self, id: &str) -> CoreResult<()> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))?;

        item.quantity += 1;
        Ok(())
    }

    /// Decreases the quantity of an existing entry by 1.
    ///
    /// An entry reaching quantity 0 is removed in place; the cart never
    /// retains a zero-quantity entry.
    pub fn decrement(&mut self, id: &str) -> CoreResult<()> {
        let index = self
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))?;

        self.items[index].quantity -= 1;

        if self.items[index].quantity == 0 {
            self.items.remove(index);
        }

        Ok(())
    }

    /// Returns the current entries in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Returns the number of distinct entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the quantity of the entry with the given id, if present.
    pub fn quantity_of(&self, id: &str) -> Option<u32> {
        self.items.iter().find(|i| i.id == id).map(|i| i.quantity)
    }

    /// Returns the total quantity across all entries (0 if empty).
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Calculates the total price: Σ price × quantity (0 if empty).
    pub fn total_price(&self) -> f64 {
        self.items.iter().map(|i| i.line_total()).sum()
    }
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals::from(cart.items())
    }
}

impl From<&[CartItem]> for CartTotals {
    fn from(items: &[CartItem]) -> Self {
        CartTotals {
            total_quantity: items.iter().map(|i| u64::from(i.quantity)).sum(),
            total_price: items.iter().map(|i| i.line_total()).sum(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: f64) -> ProductInfo {
        ProductInfo {
            id: id.to_string(),
            title: format!("Product {}", id),
            image_url: format!("https://cdn.gomarket.dev/{}.png", id),
            price,
        }
    }

    #[test]
    fn test_add_new_product_starts_at_quantity_one() {
        let mut cart = Cart::new();

        cart.add(product("a", 10.0));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of("a"), Some(1));
    }

    #[test]
    fn test_add_same_product_merges_quantity() {
        let mut cart = Cart::new();

        cart.add(product("a", 10.0));
        cart.add(product("b", 5.0));
        cart.add(product("a", 10.0));

        // No duplicate entry, other entries untouched
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.quantity_of("a"), Some(2));
        assert_eq!(cart.quantity_of("b"), Some(1));
    }

    #[test]
    fn test_merge_keeps_stored_fields() {
        let mut cart = Cart::new();

        cart.add(product("a", 10.0));

        // Repeat add with different title/price: only identity matters,
        // the stored entry's fields win.
        let mut changed = product("a", 99.0);
        changed.title = "Renamed".to_string();
        cart.add(changed);

        let item = &cart.items()[0];
        assert_eq!(item.quantity, 2);
        assert_eq!(item.price, 10.0);
        assert_eq!(item.title, "Product a");
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut cart = Cart::new();

        cart.add(product("b", 1.0));
        cart.add(product("a", 2.0));
        cart.add(product("c", 3.0));
        cart.add(product("a", 2.0));

        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_increment_existing() {
        let mut cart = Cart::new();
        cart.add(product("a", 10.0));

        cart.increment("a").unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of("a"), Some(2));
    }

    #[test]
    fn test_increment_unknown_id_is_an_error() {
        let mut cart = Cart::new();

        let err = cart.increment("ghost").unwrap_err();
        assert_eq!(err, CoreError::ProductNotFound("ghost".to_string()));
    }

    #[test]
    fn test_decrement_above_one_keeps_entry() {
        let mut cart = Cart::new();
        cart.add(product("a", 10.0));
        cart.increment("a").unwrap();

        cart.decrement("a").unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of("a"), Some(1));
    }

    #[test]
    fn test_decrement_at_one_removes_entry() {
        let mut cart = Cart::new();
        cart.add(product("a", 10.0));
        cart.add(product("b", 5.0));

        cart.decrement("a").unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of("a"), None);
        assert_eq!(cart.quantity_of("b"), Some(1));
    }

    #[test]
    fn test_decrement_unknown_id_is_an_error() {
        let mut cart = Cart::new();

        let err = cart.decrement("ghost").unwrap_err();
        assert_eq!(err, CoreError::ProductNotFound("ghost".to_string()));
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new();
        assert_eq!(cart.total_quantity(), 0);
        assert_eq!(cart.total_price(), 0.0);

        cart.add(product("a", 10.0));
        cart.add(product("a", 10.0));
        cart.add(product("b", 2.5));

        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.total_price(), 22.5);

        let totals = CartTotals::from(&cart);
        assert_eq!(totals.total_quantity, 3);
        assert_eq!(totals.total_price, 22.5);
    }

    #[test]
    fn test_add_decrement_round_trip_scenario() {
        // start empty → add(a) → add(a) → decrement(a) → decrement(a) → empty
        let mut cart = Cart::new();

        cart.add(product("a", 10.0));
        assert_eq!(cart.quantity_of("a"), Some(1));
        assert_eq!(cart.total_quantity(), 1);
        assert_eq!(cart.total_price(), 10.0);

        cart.add(product("a", 10.0));
        assert_eq!(cart.quantity_of("a"), Some(2));
        assert_eq!(cart.total_price(), 20.0);

        cart.decrement("a").unwrap();
        assert_eq!(cart.quantity_of("a"), Some(1));

        cart.decrement("a").unwrap();
        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
        assert_eq!(cart.total_price(), 0.0);
    }

    #[test]
    fn test_from_snapshot_accepts_valid_items() {
        let items = vec![
            product("a", 10.0).into_item(),
            product("b", 5.0).into_item(),
        ];

        let cart = Cart::from_snapshot(items).unwrap();
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_from_snapshot_rejects_duplicate_ids() {
        let items = vec![
            product("a", 10.0).into_item(),
            product("a", 10.0).into_item(),
        ];

        let err = Cart::from_snapshot(items).unwrap_err();
        assert_eq!(err, CoreError::DuplicateProduct("a".to_string()));
    }

    #[test]
    fn test_from_snapshot_rejects_zero_quantity() {
        let mut item = product("a", 10.0).into_item();
        item.quantity = 0;

        let err = Cart::from_snapshot(vec![item]).unwrap_err();
        assert_eq!(err, CoreError::ZeroQuantity("a".to_string()));
    }

    #[test]
    fn test_from_snapshot_rejects_negative_price() {
        let item = product("a", -1.0).into_item();

        let err = Cart::from_snapshot(vec![item]).unwrap_err();
        assert_eq!(err, CoreError::NegativePrice("a".to_string()));
    }
}
