//! Print one stored table.

use crate::cli::{GlobalArgs, ShowArgs};
use crate::commands::common;
use anyhow::{Context, Result};
use df_core::{Dataset, Value};

/// Execute the show command.
pub(crate) fn execute(args: &ShowArgs, global: &GlobalArgs) -> Result<()> {
    let config = common::load_config(global)?;
    let db_path = common::resolve_db_path(args.db_path.as_deref(), &config);

    let dataset = common::with_existing_db(&db_path, |db| {
        db.get_table(&args.table)
            .with_context(|| format!("Failed to read table {}", args.table))
    })?;
    let shown = args.limit.unwrap_or(dataset.num_rows()).min(dataset.num_rows());

    if args.json {
        return common::print_json(&json_records(&dataset, shown));
    }

    if dataset.is_empty() {
        println!("(0 rows)");
        return Ok(());
    }
    let headers = dataset.column_names();
    let cells: Vec<Vec<String>> = dataset.rows()[..shown]
        .iter()
        .map(|row| row.iter().map(Value::to_string).collect())
        .collect();
    common::print_table(&headers, &cells);
    if shown < dataset.num_rows() {
        println!("\n({shown} of {} rows)", dataset.num_rows());
    } else {
        println!("\n({} rows)", dataset.num_rows());
    }
    Ok(())
}

/// Rows as JSON objects keyed by column name.
fn json_records(dataset: &Dataset, limit: usize) -> Vec<serde_json::Value> {
    dataset.rows()[..limit]
        .iter()
        .map(|row| {
            let map: serde_json::Map<String, serde_json::Value> = dataset
                .column_names()
                .into_iter()
                .zip(row.iter())
                .map(|(col, val)| {
                    let json_val = serde_json::to_value(val).unwrap_or(serde_json::Value::Null);
                    (col.to_string(), json_val)
                })
                .collect();
            serde_json::Value::Object(map)
        })
        .collect()
}

#[cfg(test)]
#[path = "show_test.rs"]
mod tests;
