//! Error types for df-core

use thiserror::Error;

/// Core error type for Daforfer
#[derive(Error, Debug)]
pub enum CoreError {
    /// C001: Name cannot be used as a table identifier
    #[error("[C001] Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// C002: Dataset schema or row does not hold together
    #[error("[C002] Invalid dataset: {message}")]
    InvalidDataset { message: String },

    /// C003: Configuration file not found
    #[error("[C003] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// C004: Failed to parse configuration file
    #[error("[C004] Failed to parse config '{path}': {source}")]
    ConfigParseError {
        path: String,
        source: serde_yaml::Error,
    },

    /// C005: IO error with file path context
    #[error("[C005] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
