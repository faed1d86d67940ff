//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub download: DownloadConfig,
}

/// Where the corpus lives locally
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Dataset root; `~/` is expanded to the home directory
    #[serde(default = "default_directory")]
    pub directory: String,
}

pub fn default_directory() -> String {
    "~/tueg".to_string()
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
        }
    }
}

/// Remote corpus mirroring
///
/// The password is read from `--password` or the
/// `TUEG_PASSWORD` environment variable, never from this file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadConfig {
    /// Directory listing to mirror
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_username")]
    pub username: String,
    /// Stop before exceeding this many bytes (unbounded when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_bytes: Option<u64>,
    /// Per-request timeout in seconds (none when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

pub fn default_url() -> String {
    "https://www.isip.piconepress.com/projects/tuh_eeg/downloads/tuh_eeg/".to_string()
}

pub fn default_username() -> String {
    "nedc_tuh_eeg".to_string()
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            username: default_username(),
            max_bytes: None,
            timeout_secs: None,
        }
    }
}
