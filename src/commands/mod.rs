//! Command handlers for the tueg CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod collect;
pub mod completions;
pub mod config;
pub mod download;
pub mod layout;
pub mod records;
pub mod sessions;

use std::path::PathBuf;

use tueg::Config;

/// Use the root given on the command line, or the configured dataset directory.
pub fn resolve_root(root: Option<PathBuf>, config: &Config) -> PathBuf {
    root.unwrap_or_else(|| config.dataset_directory())
}

/// Render an optional field for table output.
pub fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}
