//! Dataset materialization: register a dataset in `toc` and persist it as a
//! table, atomically.

use crate::connection::CatalogDb;
use crate::error::{StoreError, StoreResult};
use crate::query;
use crate::registry::{content_exists, register_content, unregister_content, TOC_TABLE};
use crate::row_helpers::to_duck_value;
use df_core::sql_utils::{placeholders, quote_ident};
use df_core::{Dataset, TableName};
use duckdb::Connection;

fn parse_writable_name(table_name: &str) -> StoreResult<TableName> {
    let name = TableName::parse(table_name)?;
    if name.is_reserved() {
        return Err(StoreError::InvalidArgument(format!(
            "'{name}' is a registry table and cannot be written as a dataset"
        )));
    }
    Ok(name)
}

fn create_table(
    conn: &Connection,
    name: &TableName,
    dataset: &Dataset,
    overwrite: bool,
) -> StoreResult<()> {
    let columns = dataset
        .columns()
        .iter()
        .map(|c| format!("{} {}", quote_ident(&c.name), c.column_type.sql_type()))
        .collect::<Vec<_>>()
        .join(", ");
    let verb = if overwrite {
        "CREATE OR REPLACE TABLE"
    } else {
        "CREATE TABLE"
    };
    conn.execute_batch(&format!("{verb} {} ({columns})", quote_ident(name)))
        .map_err(|e| StoreError::QueryError(format!("creating table {name} failed: {e}")))
}

fn insert_rows(conn: &Connection, name: &TableName, dataset: &Dataset) -> StoreResult<()> {
    if dataset.is_empty() {
        return Ok(());
    }
    let sql = format!(
        "INSERT INTO {} VALUES {}",
        quote_ident(name),
        placeholders(dataset.num_columns())
    );
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| StoreError::QueryError(format!("prepare failed: {e}")))?;
    for (i, row) in dataset.rows().iter().enumerate() {
        let values: Vec<duckdb::types::Value> = row.iter().map(to_duck_value).collect();
        stmt.execute(duckdb::params_from_iter(values.iter()))
            .map_err(|e| {
                StoreError::QueryError(format!("inserting row {i} into {name} failed: {e}"))
            })?;
    }
    Ok(())
}

impl CatalogDb {
    /// Save `dataset` as table `table_name` and register it in `toc`.
    ///
    /// The `toc` write, the table creation, and the row inserts share one
    /// transaction: on any failure neither the entry nor the table changes.
    ///
    /// With `overwrite` the entry and table are replaced. Without it, an
    /// existing `toc` entry or table of the same name (ignoring case) fails
    /// with [`StoreError::DuplicateKey`].
    pub fn save_dataframe(
        &self,
        dataset: &Dataset,
        table_name: &str,
        description: &str,
        overwrite: bool,
    ) -> StoreResult<()> {
        let name = parse_writable_name(table_name)?;
        if dataset.num_columns() == 0 {
            return Err(StoreError::InvalidArgument(format!(
                "dataset for {name} has no columns"
            )));
        }

        self.transaction(|conn| {
            if !overwrite
                && (content_exists(conn, &name)? || query::resolve_table(conn, &name)?.is_some())
            {
                return Err(StoreError::DuplicateKey {
                    registry: TOC_TABLE,
                    name: name.to_string(),
                });
            }
            register_content(conn, &name, description, overwrite)?;
            create_table(conn, &name, dataset, overwrite)?;
            insert_rows(conn, &name, dataset)
        })?;

        log::info!(
            "Saved {name} ({} rows) to {}",
            dataset.num_rows(),
            self.location()
        );
        Ok(())
    }

    /// Read a persisted table in full.
    ///
    /// Any table can be read, including `toc` and `tov`. Fails with
    /// [`StoreError::NotFound`] when no table has this name.
    pub fn get_table(&self, table_name: &str) -> StoreResult<Dataset> {
        let name = TableName::parse(table_name)?;
        let conn = self.conn()?;
        let Some(stored) = query::resolve_table(conn, &name)? else {
            return Err(StoreError::NotFound {
                kind: "Table",
                name: name.into_inner(),
            });
        };
        query::read_table(conn, &stored)
    }

    /// Drop a dataset table and its `toc` entry in one transaction.
    ///
    /// Fails with [`StoreError::NotFound`] when neither exists.
    pub fn remove_table(&self, table_name: &str) -> StoreResult<()> {
        let name = parse_writable_name(table_name)?;
        self.transaction(|conn| {
            let stored = query::resolve_table(conn, &name)?;
            let unregistered = unregister_content(conn, &name)?;
            match stored {
                Some(table) => conn
                    .execute_batch(&format!("DROP TABLE {}", quote_ident(&table)))
                    .map_err(|e| StoreError::QueryError(format!("dropping {table} failed: {e}"))),
                None if unregistered > 0 => Ok(()),
                None => Err(StoreError::NotFound {
                    kind: "Table",
                    name: name.to_string(),
                }),
            }
        })?;
        log::info!("Removed {name} from {}", self.location());
        Ok(())
    }

    /// Whether a persisted table named `table_name` exists (ignoring case).
    pub fn table_exists(&self, table_name: &str) -> StoreResult<bool> {
        Ok(query::resolve_table(self.conn()?, table_name)?.is_some())
    }

    /// Every persisted table, registries included, sorted by name.
    pub fn list_tables(&self) -> StoreResult<Vec<String>> {
        query::list_tables(self.conn()?)
    }
}

#[cfg(test)]
#[path = "materialize_test.rs"]
mod tests;
