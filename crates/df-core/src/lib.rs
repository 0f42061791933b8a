//! df-core - Core library for Daforfer
//!
//! Shared types used by the store, the exporter, and the CLI: validated
//! table names, the in-memory [`Dataset`], SQL identifier quoting, and the
//! YAML configuration.

pub mod config;
pub mod dataset;
pub mod error;
pub mod sql_utils;
pub mod table_name;

pub use config::{Config, ExportConfig, SheetNamePolicy};
pub use dataset::{Column, ColumnType, Dataset, Value};
pub use error::{CoreError, CoreResult};
pub use table_name::TableName;
