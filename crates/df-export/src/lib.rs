//! df-export - Workbook export for Daforfer
//!
//! Writes every persisted table of a catalog database into one `.xlsx`
//! workbook, one sheet per table.

pub mod error;
pub mod excel;
pub mod sheet_name;

pub use error::{ExportError, ExportResult};
pub use excel::{export_to_excel, ExportSummary, SheetSummary};
pub use sheet_name::SheetNamer;
