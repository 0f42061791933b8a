//! Registry tables: `toc` (table of contents) and `tov` (table of values).
//!
//! Registry lookups return `Option`/`Vec` and never fail on a missing name;
//! only writes without `overwrite` report [`StoreError::DuplicateKey`].

use crate::connection::CatalogDb;
use crate::ddl::REGISTRY_DDL;
use crate::error::{is_constraint_violation, StoreError, StoreResult};
use duckdb::{params, Connection};
use serde::Serialize;

/// Table of contents: one row per saved dataset.
pub const TOC_TABLE: &str = "toc";

/// Table of values: one row per stored scalar.
pub const TOV_TABLE: &str = "tov";

/// Longest accepted value name, matching `tov.name VARCHAR(255)`.
pub const MAX_VALUE_NAME_LEN: usize = 255;

/// A `toc` row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TocEntry {
    pub name: String,
    pub description: String,
}

/// A `tov` row.
///
/// `value_type` is a free-form label (`"float"`, `"int"`, ...) and is not
/// checked against `value`. A NULL `value` written by another tool reads as
/// NaN.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueEntry {
    pub name: String,
    pub description: String,
    pub value: f64,
    #[serde(rename = "type")]
    pub value_type: String,
}

/// Create `toc` and `tov` if they do not exist yet.
pub(crate) fn ensure_registries(conn: &Connection) -> StoreResult<()> {
    conn.execute_batch(REGISTRY_DDL)
        .map_err(|e| StoreError::StorageIo(format!("failed to create registry tables: {e}")))?;
    log::debug!("Registry tables {TOC_TABLE} and {TOV_TABLE} ready");
    Ok(())
}

fn validate_value_name(name: &str) -> StoreResult<()> {
    if name.is_empty() {
        return Err(StoreError::InvalidArgument(
            "value name must not be empty".to_string(),
        ));
    }
    if name.chars().count() > MAX_VALUE_NAME_LEN {
        return Err(StoreError::InvalidArgument(format!(
            "value name '{name}' is longer than {MAX_VALUE_NAME_LEN} characters"
        )));
    }
    Ok(())
}

fn value_exists(conn: &Connection, name: &str) -> StoreResult<bool> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM tov WHERE name = ?",
            params![name],
            |row| row.get(0),
        )
        .map_err(|e| StoreError::QueryError(format!("value lookup failed for {name}: {e}")))?;
    Ok(count > 0)
}

/// Whether a `toc` entry exists whose name equals `name` ignoring case.
pub(crate) fn content_exists(conn: &Connection, name: &str) -> StoreResult<bool> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM toc WHERE lower(name) = lower(?)",
            params![name],
            |row| row.get(0),
        )
        .map_err(|e| StoreError::QueryError(format!("toc lookup failed for {name}: {e}")))?;
    Ok(count > 0)
}

/// Write the `toc` entry for a dataset. With `overwrite`, entries that differ
/// from `name` only by case are replaced too, since they name the same table.
pub(crate) fn register_content(
    conn: &Connection,
    name: &str,
    description: &str,
    overwrite: bool,
) -> StoreResult<()> {
    let result = if overwrite {
        conn.execute(
            "DELETE FROM toc WHERE lower(name) = lower(?) AND name <> ?",
            params![name, name],
        )
        .and_then(|_| {
            conn.execute(
                "INSERT OR REPLACE INTO toc (name, description) VALUES (?, ?)",
                params![name, description],
            )
        })
    } else {
        conn.execute(
            "INSERT INTO toc (name, description) VALUES (?, ?)",
            params![name, description],
        )
    };
    match result {
        Ok(_) => Ok(()),
        Err(e) if is_constraint_violation(&e) => Err(StoreError::DuplicateKey {
            registry: TOC_TABLE,
            name: name.to_string(),
        }),
        Err(e) => Err(StoreError::QueryError(format!(
            "toc write failed for {name}: {e}"
        ))),
    }
}

/// Remove `toc` entries naming `name` (ignoring case). Returns the number of
/// rows removed.
pub(crate) fn unregister_content(conn: &Connection, name: &str) -> StoreResult<usize> {
    conn.execute("DELETE FROM toc WHERE lower(name) = lower(?)", params![name])
        .map_err(|e| StoreError::QueryError(format!("toc delete failed for {name}: {e}")))
}

fn map_toc_row(row: &duckdb::Row<'_>) -> duckdb::Result<TocEntry> {
    Ok(TocEntry {
        name: row.get(0)?,
        description: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
    })
}

fn map_tov_row(row: &duckdb::Row<'_>) -> duckdb::Result<ValueEntry> {
    Ok(ValueEntry {
        name: row.get(0)?,
        description: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        value: row.get::<_, Option<f64>>(2)?.unwrap_or(f64::NAN),
        value_type: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
    })
}

fn collect_entries<T, F>(
    conn: &Connection,
    sql: &str,
    name: Option<&str>,
    map: F,
) -> StoreResult<Vec<T>>
where
    F: FnMut(&duckdb::Row<'_>) -> duckdb::Result<T>,
{
    let mut stmt = conn
        .prepare(sql)
        .map_err(|e| StoreError::QueryError(format!("prepare failed: {e}")))?;
    let rows = match name {
        Some(n) => stmt.query_map(params![n], map),
        None => stmt.query_map([], map),
    }
    .map_err(|e| StoreError::QueryError(format!("query failed: {e}")))?
    .collect::<Result<Vec<_>, _>>()
    .map_err(|e| StoreError::QueryError(format!("row error: {e}")))?;
    Ok(rows)
}

impl CatalogDb {
    /// Create `toc` and `tov` if absent. Already done by `open`; calling it
    /// again is a no-op.
    pub fn ensure_registries(&self) -> StoreResult<()> {
        ensure_registries(self.conn()?)
    }

    /// Store a scalar value in `tov`.
    ///
    /// With `overwrite` an existing entry is replaced; without it an existing
    /// `name` fails with [`StoreError::DuplicateKey`] and nothing is written.
    pub fn add_value(
        &self,
        name: &str,
        description: &str,
        value: f64,
        value_type: &str,
        overwrite: bool,
    ) -> StoreResult<()> {
        validate_value_name(name)?;
        self.transaction(|conn| {
            let sql = if overwrite {
                "INSERT OR REPLACE INTO tov (name, description, value, \"type\") VALUES (?, ?, ?, ?)"
            } else {
                if value_exists(conn, name)? {
                    return Err(StoreError::DuplicateKey {
                        registry: TOV_TABLE,
                        name: name.to_string(),
                    });
                }
                "INSERT INTO tov (name, description, value, \"type\") VALUES (?, ?, ?, ?)"
            };
            match conn.execute(sql, params![name, description, value, value_type]) {
                Ok(_) => Ok(()),
                Err(e) if is_constraint_violation(&e) => Err(StoreError::DuplicateKey {
                    registry: TOV_TABLE,
                    name: name.to_string(),
                }),
                Err(e) => Err(StoreError::QueryError(format!(
                    "tov write failed for {name}: {e}"
                ))),
            }
        })?;
        log::debug!("Stored value {name} in {}", self.location());
        Ok(())
    }

    /// Delete a value from `tov`. Returns whether a row was removed; a missing
    /// name is not an error.
    pub fn remove_value(&self, name: &str) -> StoreResult<bool> {
        let removed = self
            .conn()?
            .execute("DELETE FROM tov WHERE name = ?", params![name])
            .map_err(|e| StoreError::QueryError(format!("tov delete failed for {name}: {e}")))?;
        Ok(removed > 0)
    }

    /// Look up a stored value by name.
    pub fn get_value(&self, name: &str) -> StoreResult<Option<ValueEntry>> {
        let entries = collect_entries(
            self.conn()?,
            "SELECT name, description, value, \"type\" FROM tov WHERE name = ?",
            Some(name),
            map_tov_row,
        )?;
        Ok(entries.into_iter().next())
    }

    /// All `tov` entries, ordered by name.
    pub fn list_values(&self) -> StoreResult<Vec<ValueEntry>> {
        collect_entries(
            self.conn()?,
            "SELECT name, description, value, \"type\" FROM tov ORDER BY name",
            None,
            map_tov_row,
        )
    }

    /// Look up a `toc` entry by exact name.
    pub fn get_content(&self, name: &str) -> StoreResult<Option<TocEntry>> {
        let entries = collect_entries(
            self.conn()?,
            "SELECT name, description FROM toc WHERE name = ?",
            Some(name),
            map_toc_row,
        )?;
        Ok(entries.into_iter().next())
    }

    /// All `toc` entries, ordered by name.
    pub fn list_contents(&self) -> StoreResult<Vec<TocEntry>> {
        collect_entries(
            self.conn()?,
            "SELECT name, description FROM toc ORDER BY name",
            None,
            map_toc_row,
        )
    }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
