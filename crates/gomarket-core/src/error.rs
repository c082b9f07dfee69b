//! # Error Types
//!
//! Domain-specific error types for gomarket-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌────────────────────────────────────────────────────────────────────────┐
//! │                           Error Types                                  │
//! │                                                                        │
//! │  gomarket-core errors (this file)                                      │
//! │  └── CoreError       - Cart rule violations                            │
//! │                                                                        │
//! │  gomarket-store errors (separate crate)                                │
//! │  └── StoreError      - Persistence failures                            │
//! │                                                                        │
//! │  Flow: CoreError surfaces to the caller; StoreError is absorbed        │
//! │        inside the engine (local cart must always remain usable).       │
//! └────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, quantity)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Cart rule violations.
///
/// `ProductNotFound` is the only variant a well-behaved UI can trigger at
/// runtime, and only by passing an id that is not in the cart - an internal
/// invariant violation, raised explicitly so tests can observe it. The
/// snapshot variants are produced while validating a loaded snapshot; the
/// engine treats them as "snapshot absent" rather than propagating them.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// No cart entry carries the given id.
    ///
    /// ## When This Occurs
    /// - `increment`/`decrement` called with an id absent from the cart
    #[error("Product not found in cart: {0}")]
    ProductNotFound(String),

    /// A snapshot contained two entries with the same id.
    #[error("Duplicate product in snapshot: {0}")]
    DuplicateProduct(String),

    /// A snapshot entry carried a quantity of 0.
    ///
    /// Zero-quantity entries must be removed, never persisted.
    #[error("Invalid quantity 0 for product {0}")]
    ZeroQuantity(String),

    /// A snapshot entry carried a negative price.
    #[error("Negative price for product {0}")]
    NegativePrice(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProductNotFound("coffee-250".to_string());
        assert_eq!(err.to_string(), "Product not found in cart: coffee-250");

        let err = CoreError::DuplicateProduct("a".to_string());
        assert_eq!(err.to_string(), "Duplicate product in snapshot: a");

        let err = CoreError::ZeroQuantity("a".to_string());
        assert_eq!(err.to_string(), "Invalid quantity 0 for product a");
    }
}
