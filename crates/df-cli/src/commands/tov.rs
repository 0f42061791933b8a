//! Print the table of values.

use crate::cli::{GlobalArgs, RegistryArgs};
use crate::commands::common;
use anyhow::{Context, Result};

/// Execute the tov command.
pub(crate) fn execute(args: &RegistryArgs, global: &GlobalArgs) -> Result<()> {
    let config = common::load_config(global)?;
    let db_path = common::resolve_db_path(args.db_path.as_deref(), &config);

    let values = common::with_existing_db(&db_path, |db| {
        db.list_values().context("Failed to read table of values")
    })?;

    if args.json {
        return common::print_json(&values);
    }

    if values.is_empty() {
        println!("No stored values.");
        return Ok(());
    }
    let cells: Vec<Vec<String>> = values
        .iter()
        .map(|v| {
            vec![
                v.name.clone(),
                v.value.to_string(),
                v.value_type.clone(),
                v.description.clone(),
            ]
        })
        .collect();
    common::print_table(&["NAME", "VALUE", "TYPE", "DESCRIPTION"], &cells);
    println!("\n({} values)", values.len());
    Ok(())
}
