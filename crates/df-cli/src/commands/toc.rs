//! Print the table of contents.

use crate::cli::{GlobalArgs, RegistryArgs};
use crate::commands::common;
use anyhow::{Context, Result};
use df_store::query;
use serde::Serialize;

/// One saved dataset as reported by `daforfer toc`.
#[derive(Debug, Serialize)]
struct TocRow {
    name: String,
    description: String,
    /// `None` when the registered table cannot be counted
    rows: Option<i64>,
}

/// Execute the toc command.
pub(crate) fn execute(args: &RegistryArgs, global: &GlobalArgs) -> Result<()> {
    let config = common::load_config(global)?;
    let db_path = common::resolve_db_path(args.db_path.as_deref(), &config);

    let rows = common::with_existing_db(&db_path, |db| {
        let conn = db.conn()?;
        let entries = db
            .list_contents()
            .context("Failed to read table of contents")?;
        let rows = entries
            .into_iter()
            .map(|entry| {
                let count = query::resolve_table(conn, &entry.name)
                    .ok()
                    .flatten()
                    .and_then(|table| query::table_row_count(conn, &table).ok());
                if count.is_none() {
                    log::warn!("No readable table for toc entry {}", entry.name);
                }
                TocRow {
                    name: entry.name,
                    description: entry.description,
                    rows: count,
                }
            })
            .collect::<Vec<_>>();
        Ok(rows)
    })?;

    if args.json {
        return common::print_json(&rows);
    }

    if rows.is_empty() {
        println!("No saved datasets.");
        return Ok(());
    }
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                r.name.clone(),
                r.rows.map_or_else(|| "-".to_string(), |n| n.to_string()),
                r.description.clone(),
            ]
        })
        .collect();
    common::print_table(&["NAME", "ROWS", "DESCRIPTION"], &cells);
    println!("\n({} datasets)", rows.len());
    Ok(())
}
