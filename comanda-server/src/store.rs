//! redb-based document store
//!
//! Durable key-value persistence for the whole-document blobs shared by
//! every page: the menu, the confirmed-menu snapshot, the table list and
//! the order log.
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `documents` | document key | JSON blob | Whole-document storage |
//!
//! # Contract
//!
//! - `load` returns the last written value, or absent when the key was never
//!   written or the payload is unreadable. Corruption degrades to "no data",
//!   never to an error that aborts the caller.
//! - `save` serializes and overwrites in one committed transaction; the
//!   prior value is unrecoverable (no versioning).
//! - Writers are not serialized against each other: a writer that read stale
//!   state and writes back silently discards concurrent changes
//!   (last-write-wins at whole-document granularity). Kept as a documented
//!   limitation of the storage convention.
//!
//! # Durability
//!
//! redb commits with `Durability::Immediate` by default, so a completed
//! `save` survives power loss and the file is always in a consistent state.

use std::path::Path;
use std::sync::Arc;

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Table for documents: key = document name, value = JSON blob
const DOCUMENTS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("documents");

/// Canonical document keys (每类数据一个键)
pub mod keys {
    /// Working menu document
    pub const MENU: &str = "menu";
    /// Confirmed menu snapshot
    pub const CONFIRMED_MENU: &str = "confirmed-menu";
    /// Dining table list
    pub const TABLES: &str = "tables";
    /// Append-only order log (status mutated in place)
    pub const ORDERS: &str = "orders";
}

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Document store backed by redb
#[derive(Clone)]
pub struct DocumentStore {
    db: Arc<Database>,
}

impl std::fmt::Debug for DocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentStore").finish_non_exhaustive()
    }
}

impl DocumentStore {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let db = Database::create(path)?;

        // Initialize the documents table so read transactions always find it
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(DOCUMENTS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StoreResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(DOCUMENTS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Last written document for `key`, or `None` when never written or
    /// unreadable. Read and parse failures are logged and degrade to
    /// absent state so callers render an empty view instead of failing.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let bytes = match self.read_bytes(key) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(key, error = %e, "Document read failed, treating as absent");
                return None;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "Corrupt document payload, treating as absent");
                None
            }
        }
    }

    /// Serialize and overwrite the document under `key`.
    ///
    /// The prior value is gone once this commits. Failures propagate so the
    /// caller can surface a blocking message; nothing retries automatically.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> StoreResult<()> {
        let bytes = serde_json::to_vec(value)?;
        self.put_bytes(key, &bytes)
    }

    fn read_bytes(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(DOCUMENTS_TABLE)?;
        Ok(table.get(key)?.map(|guard| guard.value().to_vec()))
    }

    fn put_bytes(&self, key: &str, bytes: &[u8]) -> StoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(DOCUMENTS_TABLE)?;
            table.insert(key, bytes)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}
