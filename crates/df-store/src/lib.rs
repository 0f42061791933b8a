//! DuckDB-backed catalog store for Daforfer.
//!
//! A [`CatalogDb`] owns one DuckDB connection to a single database file and
//! keeps two registries inside it: `toc` (table of contents, one row per
//! saved dataset) and `tov` (table of values, one row per stored scalar).
//! Saving a dataset writes its `toc` entry and its physical table in the same
//! transaction, so the two never diverge.

pub mod connection;
pub mod ddl;
pub mod error;
pub mod materialize;
pub mod query;
pub mod registry;
pub(crate) mod row_helpers;

pub use connection::{with_session, CatalogDb};
pub use error::{StoreError, StoreResult};
pub use registry::{TocEntry, ValueEntry, TOC_TABLE, TOV_TABLE};
