//! CLI command implementations

pub(crate) mod common;
pub(crate) mod export;
pub(crate) mod show;
pub(crate) mod toc;
pub(crate) mod tov;
