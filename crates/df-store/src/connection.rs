//! Catalog database session.
//!
//! [`CatalogDb`] owns a DuckDB [`Connection`] and provides helpers for opening,
//! closing, and transacting against the catalog database. Registry and
//! materialization operations live in [`crate::registry`] and
//! [`crate::materialize`].

use crate::error::{StoreError, StoreResult};
use crate::registry::ensure_registries;
use duckdb::Connection;
use std::path::Path;

/// Live handle to one DuckDB catalog file.
///
/// Single-threaded: no `Mutex`, one session per file. The connection is
/// released by [`close`](Self::close) or when the value is dropped; every
/// operation after `close` fails with [`StoreError::SessionClosed`].
pub struct CatalogDb {
    conn: Option<Connection>,
    location: String,
}

impl CatalogDb {
    /// Open (or create) the catalog database at `path` and ensure the `toc`
    /// and `tov` registries exist.
    pub fn open(path: &Path) -> StoreResult<Self> {
        let conn = Connection::open(path)
            .map_err(|e| StoreError::StorageIo(format!("{e}: {}", path.display())))?;
        Self::from_connection(conn, path.display().to_string())
    }

    /// Create an in-memory catalog with both registries.
    ///
    /// Useful for unit tests that don't need persistence.
    pub fn open_memory() -> StoreResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| StoreError::StorageIo(e.to_string()))?;
        Self::from_connection(conn, ":memory:".to_string())
    }

    fn from_connection(conn: Connection, location: String) -> StoreResult<Self> {
        ensure_registries(&conn)?;
        log::debug!("Opened catalog database {location}");
        Ok(Self {
            conn: Some(conn),
            location,
        })
    }

    /// Path of the database file, or `:memory:`.
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn is_closed(&self) -> bool {
        self.conn.is_none()
    }

    /// Borrow the underlying DuckDB connection.
    pub fn conn(&self) -> StoreResult<&Connection> {
        self.conn.as_ref().ok_or(StoreError::SessionClosed)
    }

    /// Execute `body` within a `BEGIN` / `COMMIT` transaction, rolling back on
    /// error.
    pub fn transaction<F, T>(&self, body: F) -> StoreResult<T>
    where
        F: FnOnce(&Connection) -> StoreResult<T>,
    {
        let conn = self.conn()?;
        conn.execute_batch("BEGIN TRANSACTION")
            .map_err(|e| StoreError::TransactionError(format!("BEGIN failed: {e}")))?;

        let result = body(conn);

        match &result {
            Ok(_) => {
                if let Err(commit_err) = conn.execute_batch("COMMIT") {
                    let _ = conn.execute_batch("ROLLBACK");
                    return Err(StoreError::TransactionError(format!(
                        "COMMIT failed: {commit_err}"
                    )));
                }
            }
            Err(e) => {
                log::debug!("Rolling back transaction: {e}");
                let _ = conn.execute_batch("ROLLBACK");
            }
        }
        result
    }

    /// Release the connection. Closing an already closed session is a no-op.
    pub fn close(&mut self) -> StoreResult<()> {
        let Some(conn) = self.conn.take() else {
            return Ok(());
        };
        conn.close().map_err(|(_, e)| {
            StoreError::StorageIo(format!("failed to close {}: {e}", self.location))
        })?;
        log::debug!("Closed catalog database {}", self.location);
        Ok(())
    }
}

/// Open the catalog at `path`, run `body`, and close the session on every
/// exit path.
///
/// An error from `body` takes precedence over an error from closing.
pub fn with_session<T, E, F>(path: &Path, body: F) -> Result<T, E>
where
    F: FnOnce(&CatalogDb) -> Result<T, E>,
    E: From<StoreError>,
{
    let mut db = CatalogDb::open(path)?;
    let result = body(&db);
    let closed = db.close();
    let value = result?;
    closed?;
    Ok(value)
}

#[cfg(test)]
#[path = "connection_test.rs"]
mod tests;
