//! # gomarket-core: Pure Cart Logic for GoMarket
//!
//! This crate is the **heart** of the GoMarket cart. It contains the cart
//! rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌────────────────────────────────────────────────────────────────────────┐
//! │                      GoMarket Cart Architecture                        │
//! │                                                                        │
//! │  ┌────────────────────────────────────────────────────────────────┐   │
//! │  │                  Frontend (product list, cart screen)          │   │
//! │  └─────────────────────────────┬──────────────────────────────────┘   │
//! │                                │ subscribe / add / increment / decrement│
//! │  ┌─────────────────────────────▼──────────────────────────────────┐   │
//! │  │                  gomarket-engine (CartEngine)                  │   │
//! │  └─────────────────────────────┬──────────────────────────────────┘   │
//! │                                │                                       │
//! │  ┌─────────────────────────────▼──────────────────────────────────┐   │
//! │  │               ★ gomarket-core (THIS CRATE) ★                   │   │
//! │  │                                                                │   │
//! │  │   ┌───────────┐      ┌───────────┐      ┌───────────┐         │   │
//! │  │   │   types   │      │   cart    │      │   error   │         │   │
//! │  │   │ CartItem  │      │   Cart    │      │ CoreError │         │   │
//! │  │   │ProductInfo│      │merge/decr │      │ NotFound  │         │   │
//! │  │   └───────────┘      └───────────┘      └───────────┘         │   │
//! │  │                                                                │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └────────────────────────────────────────────────────────────────┘   │
//! │                                │                                       │
//! │  ┌─────────────────────────────▼──────────────────────────────────┐   │
//! │  │              gomarket-store (snapshot persistence)             │   │
//! │  └────────────────────────────────────────────────────────────────┘   │
//! └────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Cart item types ([`CartItem`], [`ProductInfo`], [`CartTotals`])
//! - [`cart`] - The [`Cart`] collection and its mutation rules
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use gomarket_core::{Cart, ProductInfo};
//!
//! let mut cart = Cart::new();
//!
//! let coffee = ProductInfo {
//!     id: "coffee-250".to_string(),
//!     title: "Ground Coffee 250g".to_string(),
//!     image_url: "https://cdn.gomarket.dev/coffee-250.png".to_string(),
//!     price: 7.5,
//! };
//!
//! // First add inserts with quantity 1, second add merges to quantity 2
//! cart.add(coffee.clone());
//! cart.add(coffee);
//!
//! assert_eq!(cart.len(), 1);
//! assert_eq!(cart.total_quantity(), 2);
//! assert_eq!(cart.total_price(), 15.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use gomarket_core::Cart` instead of
// `use gomarket_core::cart::Cart`

pub use cart::Cart;
pub use error::{CoreError, CoreResult};
pub use types::{CartItem, CartTotals, ProductInfo};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Storage key under which the cart snapshot is persisted.
///
/// ## Why a constant?
/// The engine keeps exactly one record in the durable store: the full cart
/// collection, serialized as a JSON array. The key is namespaced with the
/// application prefix so the store can be shared with other app state later.
pub const CART_STORAGE_KEY: &str = "@gomarket:products";
