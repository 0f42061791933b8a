//! Error types for df-export

use thiserror::Error;

/// Workbook export errors
#[derive(Error, Debug)]
pub enum ExportError {
    /// Reading from the catalog failed (X001)
    #[error("[X001] Catalog read failed: {0}")]
    Store(#[from] df_store::StoreError),

    /// Table name cannot be used as a sheet name (X002)
    #[error("[X002] Table '{name}' cannot be exported as a sheet: {reason}")]
    InvalidSheetName { name: String, reason: String },

    /// Table does not fit in a worksheet (X003)
    #[error("[X003] Table '{table}' exceeds the worksheet limit: {detail}")]
    LimitExceeded { table: String, detail: String },

    /// Writing cells into the workbook failed (X004)
    #[error("[X004] Workbook write failed: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    /// Saving the workbook file failed (X005)
    #[error("[X005] Failed to write workbook '{path}': {source}")]
    StorageIo {
        path: String,
        source: rust_xlsxwriter::XlsxError,
    },
}

/// Result type alias for ExportError
pub type ExportResult<T> = Result<T, ExportError>;
