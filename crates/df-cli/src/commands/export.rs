//! Export the catalog to an Excel workbook.

use crate::cli::{ExportArgs, GlobalArgs};
use crate::commands::common;
use anyhow::Result;
use df_core::SheetNamePolicy;

/// Execute the export command.
pub(crate) fn execute(args: &ExportArgs, global: &GlobalArgs) -> Result<()> {
    let config = common::load_config(global)?;
    let db_path = common::resolve_db_path(args.db_path.as_deref(), &config);
    let output_path = args
        .output_path
        .clone()
        .unwrap_or_else(|| config.export.output.clone());

    let mut export_config = config.export;
    if args.strict_sheet_names {
        export_config.sheet_names = SheetNamePolicy::Strict;
    }

    let summary = common::with_existing_db(&db_path, |db| {
        Ok(df_export::export_to_excel(db, &output_path, &export_config)?)
    })?;

    for sheet in summary.sheets.iter().filter(|s| s.sheet != s.table) {
        log::info!("Table {} written to sheet '{}'", sheet.table, sheet.sheet);
    }
    println!(
        "Database {} successfully exported to {}",
        db_path.display(),
        summary.path.display()
    );
    Ok(())
}
