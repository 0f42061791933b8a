//! Embedded DDL for the registry tables.
//!
//! Both statements use `IF NOT EXISTS`, so running them against an existing
//! database is a no-op.

/// Creates `toc` and `tov` when absent.
pub static REGISTRY_DDL: &str = include_str!("registries.sql");
