//! Configuration management for tueg

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::mirror::Budget;

impl Config {
    /// Get the config file path (~/.config/tueg/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Expand ~ in the dataset directory path
    pub fn dataset_directory(&self) -> PathBuf {
        let dir = &self.dataset.directory;
        if let Some(stripped) = dir.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        }
        PathBuf::from(dir)
    }

    /// Byte budget for downloads
    pub fn download_budget(&self) -> Budget {
        Budget::from_limit(self.download.max_bytes)
    }

    /// Request timeout for downloads
    pub fn download_timeout(&self) -> Option<Duration> {
        self.download.timeout_secs.map(Duration::from_secs)
    }
}
