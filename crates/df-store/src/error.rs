//! Error types for the catalog store.

use thiserror::Error;

/// Catalog store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open, create, or close the database file (S001).
    #[error("[S001] Database storage failed: {0}")]
    StorageIo(String),

    /// Name already present and overwrite was not requested (S002).
    #[error("[S002] Duplicate key in {registry}: '{name}' already exists and overwrite is false")]
    DuplicateKey { registry: &'static str, name: String },

    /// Named table or entry does not exist (S003).
    #[error("[S003] {kind} not found: {name}")]
    NotFound { kind: &'static str, name: String },

    /// Malformed table/value name or unusable dataset (S004).
    #[error("[S004] Invalid argument: {0}")]
    InvalidArgument(String),

    /// The session was closed before this operation (S005).
    #[error("[S005] Session is closed")]
    SessionClosed,

    /// SQL execution error inside the database (S006).
    #[error("[S006] Query failed: {0}")]
    QueryError(String),

    /// Transaction management error (S007).
    #[error("[S007] Transaction failed: {0}")]
    TransactionError(String),

    /// DuckDB driver error with preserved source chain (S008).
    #[error("[S008] DuckDB error")]
    DuckDb(#[source] duckdb::Error),
}

/// Result type alias for [`StoreError`].
pub type StoreResult<T> = Result<T, StoreError>;

impl From<duckdb::Error> for StoreError {
    fn from(err: duckdb::Error) -> Self {
        StoreError::DuckDb(err)
    }
}

impl From<df_core::CoreError> for StoreError {
    fn from(err: df_core::CoreError) -> Self {
        StoreError::InvalidArgument(err.to_string())
    }
}

/// Whether a DuckDB error is a primary-key / unique constraint violation.
///
/// `duckdb::Error` does not expose structured variants, so the message is
/// inspected.
pub(crate) fn is_constraint_violation(err: &duckdb::Error) -> bool {
    let msg = err.to_string();
    msg.contains("Constraint Error") || msg.contains("Duplicate key")
}
