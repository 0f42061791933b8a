//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use df_core::Config;
use df_store::CatalogDb;
use std::path::{Path, PathBuf};

use crate::cli::GlobalArgs;

/// Load the config named by `--config`, or `daforfer.yml` from the working
/// directory when present.
pub(crate) fn load_config(global: &GlobalArgs) -> Result<Config> {
    match &global.config {
        Some(path) => Config::load(path).context("Failed to load config"),
        None => {
            let cwd = std::env::current_dir().context("Failed to read working directory")?;
            Config::load_from_dir(&cwd).context("Failed to load config")
        }
    }
}

/// The database path from the command line (or `DAFORFER_DB`), else the
/// config's `database`.
pub(crate) fn resolve_db_path(arg: Option<&Path>, config: &Config) -> PathBuf {
    arg.map(Path::to_path_buf)
        .unwrap_or_else(|| config.database.clone())
}

/// Refuse to touch a database file that does not exist, since opening one
/// would silently create it.
pub(crate) fn ensure_exists(db_path: &Path) -> Result<()> {
    if !db_path.is_file() {
        anyhow::bail!("Database file not found: {}", db_path.display());
    }
    Ok(())
}

/// Open an existing database and run `body` against it, closing the session
/// whether or not `body` succeeds.
pub(crate) fn with_existing_db<T>(
    db_path: &Path,
    body: impl FnOnce(&CatalogDb) -> Result<T>,
) -> Result<T> {
    ensure_exists(db_path)?;
    df_store::with_session(db_path, body)
}

/// Print a table with dynamic column widths.
pub(crate) fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let widths = calculate_column_widths(headers, rows);

    let header_parts: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, &w)| format!("{:<width$}", h, width = w))
        .collect();
    println!("{}", header_parts.join("  "));

    let sep_parts: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    println!("{}", sep_parts.join("  "));

    for row in rows {
        let row_parts: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{:<width$}", cell, width = w))
            .collect();
        println!("{}", row_parts.join("  "));
    }
}

/// Width of each column: the longest of its header and cells, in characters.
pub(crate) fn calculate_column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect()
}

/// Serialize `value` as pretty JSON on stdout.
pub(crate) fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    let output =
        serde_json::to_string_pretty(value).context("Failed to serialize JSON output")?;
    println!("{output}");
    Ok(())
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
