//! # Cart Types
//!
//! Core types shared between the engine and its consumers.
//!
//! ## Type Hierarchy
//! ```text
//! ┌────────────────────────────────────────────────────────────────────────┐
//! │                           Cart Types                                   │
//! │                                                                        │
//! │  ┌─────────────────┐     ┌─────────────────┐     ┌────────────────┐   │
//! │  │   ProductInfo   │     │    CartItem     │     │   CartTotals   │   │
//! │  │  ─────────────  │     │  ─────────────  │     │  ────────────  │   │
//! │  │  id             │ ──► │  id             │ ──► │  total_quantity│   │
//! │  │  title          │     │  title          │     │  total_price   │   │
//! │  │  image_url      │     │  image_url      │     └────────────────┘   │
//! │  │  price          │     │  price          │      (derived, never     │
//! │  └─────────────────┘     │  quantity ≥ 1   │       stored)            │
//! │   (what the catalog      └─────────────────┘                          │
//! │    hands the engine)      (what the cart holds                        │
//! │                            and persists)                              │
//! └────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Format
//! `CartItem` doubles as the persisted snapshot record. The on-disk format is
//! a JSON array of items with exactly these field names (`id`, `title`,
//! `image_url`, `price`, `quantity`), so serde renaming is deliberately NOT
//! applied here.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Product Info
// =============================================================================

/// A product descriptor as handed to the engine by the catalog/UI.
///
/// Identical to [`CartItem`] minus the quantity: the engine decides the
/// quantity (1 on first add, merge-on-add afterwards).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductInfo {
    /// Unique, opaque product identifier.
    pub id: String,

    /// Display name shown in the cart.
    pub title: String,

    /// URL of the product image.
    pub image_url: String,

    /// Unit price in currency units (non-negative).
    pub price: f64,
}

impl ProductInfo {
    /// Converts the descriptor into a cart entry with quantity 1.
    pub fn into_item(self) -> CartItem {
        CartItem {
            id: self.id,
            title: self.title,
            image_url: self.image_url,
            price: self.price,
            quantity: 1,
        }
    }
}

// =============================================================================
// Cart Item
// =============================================================================

/// A line item in the cart.
///
/// ## Invariant
/// `quantity >= 1` whenever the item is part of a [`Cart`](crate::Cart):
/// an item that reaches quantity 0 is removed, never retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartItem {
    /// Unique, opaque product identifier.
    pub id: String,

    /// Display name shown in the cart.
    pub title: String,

    /// URL of the product image.
    pub image_url: String,

    /// Unit price in currency units (non-negative).
    pub price: f64,

    /// Quantity in cart (always >= 1).
    pub quantity: u32,
}

impl CartItem {
    /// Calculates the line total (unit price × quantity).
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Derived cart aggregates for presentation layers.
///
/// Computed on demand from the current collection, never stored. The
/// cart-summary widget reads these to render its badge and price line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartTotals {
    /// Sum of quantities across all entries (0 if empty).
    pub total_quantity: u64,

    /// Sum of `price × quantity` across all entries (0 if empty).
    pub total_price: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================
