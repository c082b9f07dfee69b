//! # Store Error Types
//!
//! Error types for persistence operations.
//!
//! ## Error Flow
//! ```text
//! ┌────────────────────────────────────────────────────────────────────────┐
//! │                       Error Propagation                                │
//! │                                                                        │
//! │  SQLite Error (sqlx::Error)                                            │
//! │       │                                                                │
//! │       ▼                                                                │
//! │  StoreError (this module) ← Categorized: Unavailable / Full            │
//! │       │                                                                │
//! │       ▼                                                                │
//! │  CartEngine logs it and keeps the in-memory cart authoritative         │
//! │  (best-effort durability: a failed write is dropped, never fatal)      │
//! │                                                                        │
//! └────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Persistence operation errors.
///
/// The taxonomy is intentionally small: the engine never branches on the
/// details, it only decides between "storage said no" (both variants,
/// absorbed) and success.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing storage could not be reached or the operation failed.
    ///
    /// ## When This Occurs
    /// - Database file can't be opened (permissions, missing directory)
    /// - Pool exhausted or closed
    /// - Migration or query failure
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// The backing storage has no room for the write.
    #[error("Storage full")]
    Full,
}

/// Convert sqlx errors to StoreError.
///
/// ## Error Mapping
/// ```text
/// "database or disk is full"  → StoreError::Full
/// Everything else             → StoreError::Unavailable
/// ```
impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            // SQLite reports SQLITE_FULL with this message
            if db_err.message().contains("database or disk is full") {
                return StoreError::Full;
            }
        }

        StoreError::Unavailable(err.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for StoreError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        StoreError::Unavailable(err.to_string())
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::Unavailable("pool closed".to_string());
        assert_eq!(err.to_string(), "Storage unavailable: pool closed");

        assert_eq!(StoreError::Full.to_string(), "Storage full");
    }

    #[test]
    fn test_generic_sqlx_error_maps_to_unavailable() {
        let err: StoreError = sqlx::Error::PoolClosed.into();
        assert!(matches!(err, StoreError::Unavailable(_)));
    }
}
