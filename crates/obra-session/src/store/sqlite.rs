//! SqliteStore: file-backed key-value table.

use std::path::Path;
use std::sync::Mutex;

use obra_core::errors::{ObraResult, StorageError};
use obra_core::traits::KeyValueStore;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

fn to_storage_err(message: impl ToString) -> StorageError {
    StorageError::Sqlite {
        message: message.to_string(),
    }
}

/// SQLite-backed store. One connection, serialized behind a Mutex.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) a store backed by a file on disk.
    pub fn open(path: &Path) -> ObraResult<Self> {
        let conn = Connection::open(path).map_err(to_storage_err)?;
        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA busy_timeout = 5000;
            ",
        )
        .map_err(to_storage_err)?;
        debug!(path = %path.display(), "opened SQLite key-value store");
        Self::initialize(conn)
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> ObraResult<Self> {
        let conn = Connection::open_in_memory().map_err(to_storage_err)?;
        Self::initialize(conn)
    }

    fn initialize(conn: Connection) -> ObraResult<Self> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY NOT NULL,
                value TEXT NOT NULL
            );",
        )
        .map_err(to_storage_err)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn with_conn<F, T>(&self, f: F) -> ObraResult<T>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T>,
    {
        let conn = self
            .conn
            .lock()
            .map_err(|e| to_storage_err(format!("connection lock poisoned: {e}")))?;
        f(&conn).map_err(|e| to_storage_err(e).into())
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> ObraResult<Option<String>> {
        self.with_conn(|conn| {
            conn.query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()
        })
    }

    fn set(&self, key: &str, value: &str) -> ObraResult<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO kv (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, value],
            )
            .map(|_| ())
        })
    }

    fn remove(&self, key: &str) -> ObraResult<()> {
        self.with_conn(|conn| conn.execute("DELETE FROM kv WHERE key = ?1", params![key]).map(|_| ()))
    }
}
