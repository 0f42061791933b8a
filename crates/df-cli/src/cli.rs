//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Daforfer - inspect an analysis catalog and export it to Excel
#[derive(Parser, Debug)]
#[command(name = "daforfer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export every table in the database to an Excel workbook
    Export(ExportArgs),

    /// List saved datasets (the table of contents)
    Toc(RegistryArgs),

    /// List stored scalar values (the table of values)
    Tov(RegistryArgs),

    /// Print the contents of one table
    Show(ShowArgs),
}

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Database file to export (must exist)
    #[arg(env = "DAFORFER_DB")]
    pub db_path: Option<PathBuf>,

    /// Workbook to write
    pub output_path: Option<PathBuf>,

    /// Fail instead of renaming tables that are not valid sheet names
    #[arg(long)]
    pub strict_sheet_names: bool,
}

/// Arguments for the toc and tov commands
#[derive(Args, Debug)]
pub struct RegistryArgs {
    /// Database file to read (must exist)
    #[arg(env = "DAFORFER_DB")]
    pub db_path: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Table to print
    pub table: String,

    /// Database file to read (must exist)
    #[arg(env = "DAFORFER_DB")]
    pub db_path: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Print at most this many rows
    #[arg(short, long)]
    pub limit: Option<usize>,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
