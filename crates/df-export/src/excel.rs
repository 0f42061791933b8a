//! Catalog-to-workbook export.

use crate::error::{ExportError, ExportResult};
use crate::sheet_name::SheetNamer;
use df_core::{Dataset, ExportConfig, Value};
use df_store::{query, CatalogDb};
use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook, Worksheet, XlsxError};
use std::path::{Path, PathBuf};

/// Rows per worksheet, header row included.
pub const MAX_SHEET_ROWS: usize = 1_048_576;

/// Columns per worksheet.
pub const MAX_SHEET_COLUMNS: usize = 16_384;

/// One exported table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSummary {
    pub table: String,
    pub sheet: String,
    pub rows: usize,
}

/// What [`export_to_excel`] wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub sheets: Vec<SheetSummary>,
}

/// Export every persisted table in `db` to a workbook at `output_path`.
///
/// Tables are written in name order, one sheet each: the header row holds
/// the column names and data starts on the second row, with no index column.
/// Sheet names are resolved for all tables before any data is read, so a
/// `strict` naming failure writes nothing. The file is only created once
/// every sheet has been filled.
pub fn export_to_excel(
    db: &CatalogDb,
    output_path: &Path,
    config: &ExportConfig,
) -> ExportResult<ExportSummary> {
    let conn = db.conn()?;
    let tables = query::list_tables(conn)?;

    let mut namer = SheetNamer::new(config.sheet_names);
    let sheet_names = tables
        .iter()
        .map(|table| namer.assign(table))
        .collect::<ExportResult<Vec<_>>>()?;

    let header_format = if config.bold_header {
        Format::new().set_bold()
    } else {
        Format::new()
    };

    let mut workbook = Workbook::new();
    let mut sheets = Vec::with_capacity(tables.len());
    for (table, sheet) in tables.into_iter().zip(sheet_names) {
        let dataset = query::read_table(conn, &table)?;
        check_limits(&table, &dataset)?;

        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(&sheet)
            .map_err(|e| ExportError::InvalidSheetName {
                name: table.clone(),
                reason: e.to_string(),
            })?;
        write_dataset(worksheet, &dataset, &header_format)?;
        log::debug!("Wrote {} rows of {table} to sheet {sheet}", dataset.num_rows());

        sheets.push(SheetSummary {
            table,
            sheet,
            rows: dataset.num_rows(),
        });
    }

    workbook
        .save(output_path)
        .map_err(|e| ExportError::StorageIo {
            path: output_path.display().to_string(),
            source: e,
        })?;
    log::info!(
        "Exported {} tables to {}",
        sheets.len(),
        output_path.display()
    );

    Ok(ExportSummary {
        path: output_path.to_path_buf(),
        sheets,
    })
}

fn check_limits(table: &str, dataset: &Dataset) -> ExportResult<()> {
    if dataset.num_rows() + 1 > MAX_SHEET_ROWS {
        return Err(ExportError::LimitExceeded {
            table: table.to_string(),
            detail: format!(
                "{} rows plus header, at most {MAX_SHEET_ROWS} allowed",
                dataset.num_rows()
            ),
        });
    }
    if dataset.num_columns() > MAX_SHEET_COLUMNS {
        return Err(ExportError::LimitExceeded {
            table: table.to_string(),
            detail: format!(
                "{} columns, at most {MAX_SHEET_COLUMNS} allowed",
                dataset.num_columns()
            ),
        });
    }
    Ok(())
}

fn write_dataset(
    worksheet: &mut Worksheet,
    dataset: &Dataset,
    header_format: &Format,
) -> Result<(), XlsxError> {
    // Both casts are bounded by check_limits.
    for (col, name) in dataset.column_names().into_iter().enumerate() {
        worksheet.write_string_with_format(0, col as ColNum, name, header_format)?;
    }
    for (i, row) in dataset.rows().iter().enumerate() {
        let excel_row = (i + 1) as RowNum;
        for (col, value) in row.iter().enumerate() {
            write_cell(worksheet, excel_row, col as ColNum, value)?;
        }
    }
    Ok(())
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: RowNum,
    col: ColNum,
    value: &Value,
) -> Result<(), XlsxError> {
    match value {
        Value::Null => {}
        Value::Boolean(b) => {
            worksheet.write_boolean(row, col, *b)?;
        }
        Value::Integer(n) => {
            worksheet.write_number(row, col, *n as f64)?;
        }
        // Excel has no representation for NaN or infinities.
        Value::Double(x) if !x.is_finite() => {
            worksheet.write_string(row, col, x.to_string())?;
        }
        Value::Double(x) => {
            worksheet.write_number(row, col, *x)?;
        }
        Value::Text(s) => {
            worksheet.write_string(row, col, s)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "excel_test.rs"]
mod tests;
