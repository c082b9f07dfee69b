//! # SQLite Snapshot Store
//!
//! SQLite-backed implementation of [`SnapshotStore`], used as a one-table
//! key-value store.
//!
//! ## Architecture
//! ```text
//! ┌────────────────────────────────────────────────────────────────────────┐
//! │                      SQLite Snapshot Store                             │
//! │                                                                        │
//! │  App Startup                                                           │
//! │       │                                                                │
//! │       ▼                                                                │
//! │  StoreConfig::new(path) ← Configure pool settings                      │
//! │       │                                                                │
//! │       ▼                                                                │
//! │  SqliteStore::new(config).await ← Create pool + run migrations         │
//! │       │                                                                │
//! │       ▼                                                                │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │             SqlitePool                  │                           │
//! │  │  ┌─────┐ ┌─────┐ ┌─────┐               │  (max_connections)        │
//! │  │  │Conn1│ │Conn2│ │Conn3│ ...           │                           │
//! │  │  └─────┘ └─────┘ └─────┘               │                           │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                │
//! │       ▼                                                                │
//! │  load(key)       ──► SELECT value FROM snapshots WHERE key = ?         │
//! │  save(key,bytes) ──► INSERT ... ON CONFLICT(key) DO UPDATE             │
//! │                                                                        │
//! └────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## WAL Mode
//! SQLite WAL (Write-Ahead Logging) mode is enabled for:
//! - Better concurrent read performance
//! - Readers don't block writers
//! - Better crash recovery

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use async_trait::async_trait;

use crate::error::{StoreError, StoreResult};
use crate::migrations;
use crate::store::SnapshotStore;

// =============================================================================
// Configuration
// =============================================================================

/// Snapshot store configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = StoreConfig::new("/path/to/cart.db")
///     .max_connections(2);
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,

    /// Maximum number of connections in the pool.
    /// Default: 2 (one writer, one reader is plenty for a local cart)
    pub max_connections: u32,

    /// Minimum number of connections to keep alive.
    /// Default: 1
    pub min_connections: u32,

    /// Connection timeout duration.
    /// Default: 30 seconds
    pub connect_timeout: Duration,

    /// Idle timeout before closing a connection.
    /// Default: 10 minutes
    pub idle_timeout: Duration,

    /// Whether to run migrations on connect.
    /// Default: true
    pub run_migrations: bool,
}

impl StoreConfig {
    /// Creates a new store configuration with the given path.
    ///
    /// ## Arguments
    /// * `path` - Path to the SQLite database file. Will be created if it doesn't exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StoreConfig {
            database_path: path.into(),
            max_connections: 2,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
            run_migrations: true,
        }
    }

    /// Sets the maximum number of connections.
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets whether to run migrations on connect.
    pub fn run_migrations(mut self, run: bool) -> Self {
        self.run_migrations = run;
        self
    }

    /// Creates an in-memory store configuration (for testing).
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let store = SqliteStore::new(StoreConfig::in_memory()).await?;
    /// // Store is isolated, perfect for tests
    /// ```
    pub fn in_memory() -> Self {
        StoreConfig {
            database_path: PathBuf::from(":memory:"),
            max_connections: 1, // In-memory requires single connection
            min_connections: 1,
            connect_timeout: Duration::from_secs(5),
            idle_timeout: Duration::from_secs(60),
            run_migrations: true,
        }
    }
}

// =============================================================================
// SQLite Store
// =============================================================================

/// SQLite-backed snapshot store.
///
/// One row per key in the `snapshots` table; the cart engine only ever uses
/// a single fixed key.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    /// The SQLite connection pool.
    pool: SqlitePool,
}

impl SqliteStore {
    /// Creates a new SQLite snapshot store.
    ///
    /// ## What This Does
    /// 1. Creates the database file if it doesn't exist
    /// 2. Configures SQLite for a local single-process store:
    ///    - WAL mode for concurrent reads
    ///    - NORMAL synchronous (balance of safety/speed)
    /// 3. Creates the connection pool
    /// 4. Runs migrations (if enabled)
    ///
    /// ## Returns
    /// * `Ok(SqliteStore)` - Ready-to-use store handle
    /// * `Err(StoreError)` - Connection or migration failed
    pub async fn new(config: StoreConfig) -> StoreResult<Self> {
        info!(
            path = %config.database_path.display(),
            "Initializing snapshot store"
        );

        // sqlite://path creates file if not exists (mode=rwc)
        let connect_url = format!("sqlite://{}?mode=rwc", config.database_path.display());

        let connect_options = SqliteConnectOptions::from_str(&connect_url)
            .map_err(|e| StoreError::Unavailable(e.to_string()))?
            // WAL mode: readers don't block the snapshot writer
            .journal_mode(SqliteJournalMode::Wal)
            // NORMAL synchronous: data is safe from corruption, may lose
            // the last write on crash - acceptable for best-effort snapshots
            .synchronous(SqliteSynchronous::Normal)
            // Create file if it doesn't exist
            .create_if_missing(true);

        debug!("Connection options configured");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.connect_timeout)
            .idle_timeout(Some(config.idle_timeout))
            .connect_with(connect_options)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        info!(
            max_connections = config.max_connections,
            "Snapshot store pool created"
        );

        let store = SqliteStore { pool };

        if config.run_migrations {
            store.run_migrations().await?;
        }

        Ok(store)
    }

    /// Runs store migrations.
    ///
    /// Automatically called by `new()` unless disabled in the config.
    pub async fn run_migrations(&self) -> StoreResult<()> {
        migrations::run_migrations(&self.pool).await
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Closes the connection pool.
    ///
    /// ## When To Call
    /// - On application shutdown
    ///
    /// After calling close, all store operations will fail.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl SnapshotStore for SqliteStore {
    async fn load(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        debug!(key = %key, "Loading snapshot");

        let value: Option<Vec<u8>> =
            sqlx::query_scalar("SELECT value FROM snapshots WHERE key = ?1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        debug!(
            key = %key,
            found = value.is_some(),
            "Snapshot load complete"
        );

        Ok(value)
    }

    async fn save(&self, key: &str, value: Vec<u8>) -> StoreResult<()> {
        debug!(key = %key, bytes = value.len(), "Saving snapshot");

        sqlx::query(
            r#"
            INSERT INTO snapshots (key, value, updated_at)
            VALUES (?1, ?2, datetime('now'))
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
