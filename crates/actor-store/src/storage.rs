//! # Key-Value Storage
//!
//! Actors persist their collections through a [`KeyValueStore`]: a flat map from string keys
//! to JSON text. The store is shared by every actor of a system (and by every system opened
//! on the same profile), injected as `Arc<dyn KeyValueStore>`.
//!
//! Two back-ends are provided:
//!
//! - [`MemoryStore`] - a mutex-guarded `HashMap`, for tests and throwaway sessions
//! - [`SqliteStore`] - a single `kv_store` table in a SQLite database (file or in-memory)
//!
//! Reads are forgiving: a missing key is an empty collection, and so is a value that no
//! longer parses. Corrupted data is logged and dropped, never surfaced as a failure.

use rusqlite::{Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, warn};

/// Errors raised by a storage back-end.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Storage lock poisoned")]
    Poisoned,
}

/// A string-keyed store of JSON documents.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-process store backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
}

/// SQLite-backed store; one row per key.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Opens (or creates) the database file, creating parent directories as needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        Self::initialize(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::initialize(Connection::open_in_memory()?)
    }

    fn initialize(conn: Connection) -> Result<Self, StorageError> {
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS kv_store (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );
            ",
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let conn = self.conn.lock().map_err(|_| StorageError::Poisoned)?;
        let value = conn
            .query_row("SELECT value FROM kv_store WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let conn = self.conn.lock().map_err(|_| StorageError::Poisoned)?;
        conn.execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = CURRENT_TIMESTAMP",
            rusqlite::params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let conn = self.conn.lock().map_err(|_| StorageError::Poisoned)?;
        conn.execute("DELETE FROM kv_store WHERE key = ?1", [key])?;
        Ok(())
    }
}

/// Reads a single JSON document. Missing, unreadable and corrupted values all yield `None`.
pub fn load_value<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!(key, error = %e, "Storage read failed, treating as absent");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "Discarding corrupted value");
            None
        }
    }
}

/// Writes a single JSON document, replacing whatever was stored under `key`.
pub fn save_value<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)?;
    debug!(key, bytes = raw.len(), "Saved");
    Ok(())
}

/// Reads a whole collection; anything but a well-formed JSON array is an empty collection.
pub fn load_collection<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Vec<T> {
    load_value(store, key).unwrap_or_default()
}

/// Rewrites a whole collection.
pub fn save_collection<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    items: &[T],
) -> Result<(), StorageError> {
    save_value(store, key, items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(store: &dyn KeyValueStore) {
        assert_eq!(store.get("cart").unwrap(), None);

        store.set("cart", "[1,2]").unwrap();
        assert_eq!(store.get("cart").unwrap().as_deref(), Some("[1,2]"));

        store.set("cart", "[3]").unwrap();
        assert_eq!(store.get("cart").unwrap().as_deref(), Some("[3]"));

        store.remove("cart").unwrap();
        assert_eq!(store.get("cart").unwrap(), None);
    }

    #[test]
    fn test_memory_store_round_trip() {
        exercise(&MemoryStore::new());
    }

    #[test]
    fn test_sqlite_store_round_trip() {
        exercise(&SqliteStore::open_in_memory().unwrap());
    }

    #[test]
    fn test_sqlite_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile").join("store.db");

        let store = SqliteStore::open(&path).unwrap();
        save_collection(&store, "orders", &[1u64, 2, 3]).unwrap();
        drop(store);

        let reopened = SqliteStore::open(&path).unwrap();
        let orders: Vec<u64> = load_collection(&reopened, "orders");
        assert_eq!(orders, vec![1, 2, 3]);
    }

    #[test]
    fn test_corrupted_collection_loads_empty() {
        let store = MemoryStore::new();
        store.set("reviews", "{not json").unwrap();
        let reviews: Vec<u64> = load_collection(&store, "reviews");
        assert!(reviews.is_empty());
    }

    #[test]
    fn test_wrong_shape_loads_empty() {
        let store = MemoryStore::new();
        store.set("orders", "{\"id\": 1}").unwrap();
        let orders: Vec<u64> = load_collection(&store, "orders");
        assert!(orders.is_empty());
    }
}
