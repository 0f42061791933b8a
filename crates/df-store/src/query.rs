//! Table introspection and full-table reads.
//!
//! Free functions over a borrowed [`Connection`], so the exporter can walk
//! every table through the same code path as [`CatalogDb::get_table`].
//!
//! [`CatalogDb::get_table`]: crate::CatalogDb::get_table

use crate::error::{StoreError, StoreResult};
use crate::row_helpers::{read_value, select_expr};
use df_core::sql_utils::quote_ident;
use df_core::{Column, ColumnType, Dataset};
use duckdb::{params, Connection};

/// Base tables of the `main` schema in the attached database file.
const BASE_TABLES: &str = "FROM information_schema.tables \
     WHERE table_catalog = current_database() \
     AND table_schema = 'main' \
     AND table_type = 'BASE TABLE'";

/// List every persisted table (registries, datasets, ad hoc tables), sorted
/// by name.
pub fn list_tables(conn: &Connection) -> StoreResult<Vec<String>> {
    let sql = format!("SELECT table_name {BASE_TABLES} ORDER BY table_name");
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| StoreError::QueryError(format!("prepare failed: {e}")))?;
    let tables = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .map_err(|e| StoreError::QueryError(format!("listing tables failed: {e}")))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| StoreError::QueryError(format!("row error: {e}")))?;
    Ok(tables)
}

/// Return the stored spelling of the table matching `name` case-insensitively,
/// or `None` when no such table exists.
pub fn resolve_table(conn: &Connection, name: &str) -> StoreResult<Option<String>> {
    let sql = format!("SELECT table_name {BASE_TABLES} AND lower(table_name) = lower(?) LIMIT 1");
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| StoreError::QueryError(format!("prepare failed: {e}")))?;
    let mut rows = stmt
        .query_map(params![name], |row| row.get::<_, String>(0))
        .map_err(|e| StoreError::QueryError(format!("table lookup failed for {name}: {e}")))?;
    rows.next()
        .transpose()
        .map_err(|e| StoreError::QueryError(format!("row error: {e}")))
}

/// Columns of `table` in ordinal order, mapped to dataset column types.
pub fn table_columns(conn: &Connection, table: &str) -> StoreResult<Vec<Column>> {
    let mut stmt = conn
        .prepare(
            "SELECT column_name, data_type FROM information_schema.columns \
             WHERE table_catalog = current_database() \
             AND table_schema = 'main' \
             AND table_name = ? \
             ORDER BY ordinal_position",
        )
        .map_err(|e| StoreError::QueryError(format!("prepare failed: {e}")))?;
    let columns = stmt
        .query_map(params![table], |row| {
            let name: String = row.get(0)?;
            let data_type: String = row.get(1)?;
            Ok(Column::new(name, ColumnType::from_sql_type(&data_type)))
        })
        .map_err(|e| StoreError::QueryError(format!("column lookup failed for {table}: {e}")))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| StoreError::QueryError(format!("row error: {e}")))?;
    Ok(columns)
}

/// Read the full contents of `table` (exact stored name) as a [`Dataset`].
///
/// Column types are taken from `information_schema` up front rather than from
/// the prepared statement: DuckDB 1.4 panics on `stmt.column_count()` before
/// execution.
pub fn read_table(conn: &Connection, table: &str) -> StoreResult<Dataset> {
    let columns = table_columns(conn, table)?;
    if columns.is_empty() {
        return Err(StoreError::NotFound {
            kind: "Table",
            name: table.to_string(),
        });
    }

    let select_list = columns
        .iter()
        .map(|c| select_expr(&quote_ident(&c.name), c.column_type))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!("SELECT {select_list} FROM {}", quote_ident(table));

    let types: Vec<ColumnType> = columns.iter().map(|c| c.column_type).collect();
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| StoreError::QueryError(format!("prepare failed for {table}: {e}")))?;
    let rows = stmt
        .query_map([], |row| {
            types
                .iter()
                .enumerate()
                .map(|(i, ty)| read_value(row, i, *ty))
                .collect::<duckdb::Result<Vec<_>>>()
        })
        .map_err(|e| StoreError::QueryError(format!("reading {table} failed: {e}")))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| StoreError::QueryError(format!("row error in {table}: {e}")))?;

    Dataset::from_rows(columns, rows)
        .map_err(|e| StoreError::QueryError(format!("reading {table} failed: {e}")))
}

/// Get the row count for `table` (exact stored name).
pub fn table_row_count(conn: &Connection, table: &str) -> StoreResult<i64> {
    let count: i64 = conn
        .query_row(
            &format!("SELECT COUNT(*) FROM {}", quote_ident(table)),
            [],
            |row| row.get(0),
        )
        .map_err(|e| StoreError::QueryError(format!("count failed for {table}: {e}")))?;
    Ok(count)
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;
