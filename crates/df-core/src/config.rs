//! Configuration file handling for `daforfer.yml`.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Database file used when neither the CLI nor the config names one.
pub const DEFAULT_DATABASE: &str = "analysis.duckdb";

/// Workbook written by `export` when no output path is given.
pub const DEFAULT_EXPORT_OUTPUT: &str = "analysis_results.xlsx";

/// Config file names looked up in a directory, in order.
pub const CONFIG_FILE_NAMES: &[&str] = &["daforfer.yml", "daforfer.yaml"];

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path to the DuckDB database file
    #[serde(default = "default_database")]
    pub database: PathBuf,

    /// Workbook export settings
    #[serde(default)]
    pub export: ExportConfig,
}

/// Settings for the catalog export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportConfig {
    /// Workbook path written by `export`
    #[serde(default = "default_export_output")]
    pub output: PathBuf,

    /// What to do with table names Excel cannot use as sheet names
    #[serde(default)]
    pub sheet_names: SheetNamePolicy,

    /// Render the header row in bold
    #[serde(default = "default_true")]
    pub bold_header: bool,
}

/// How table names that are not valid sheet names are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SheetNamePolicy {
    /// Fail the export before anything is written
    Strict,
    /// Replace invalid characters, truncate, and de-duplicate
    #[default]
    Truncate,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            export: ExportConfig::default(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output: default_export_output(),
            sheet_names: SheetNamePolicy::default(),
            bold_header: true,
        }
    }
}

fn default_database() -> PathBuf {
    PathBuf::from(DEFAULT_DATABASE)
}

fn default_export_output() -> PathBuf {
    PathBuf::from(DEFAULT_EXPORT_OUTPUT)
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from an explicit file path.
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config =
            serde_yaml::from_str(&content).map_err(|e| CoreError::ConfigParseError {
                path: path.display().to_string(),
                source: e,
            })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `daforfer.yml` (or `daforfer.yaml`) from `dir`, falling back to
    /// defaults when neither file exists.
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        match CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|p| p.exists())
        {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
