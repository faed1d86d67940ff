//! Recursive mirroring of a remote directory listing.
//!
//! The mirror walks the listing depth-first: files of a directory first, then
//! its subdirectories. A byte [`Budget`] is threaded through the walk by value.
//! When the next file would not fit, the walk stops and every enclosing level
//! returns [`MirrorOutcome::Truncated`] without touching anything else.
//! Files already on disk are skipped without asking the server, so re-running
//! resumes where the previous run stopped.

pub mod listing;
pub mod transport;

pub use listing::{Link, Listing};
pub use transport::{Credentials, HttpTransport, Transport};

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use humansize::{format_size, BINARY};
use tracing::{debug, info, warn};

use crate::corpus::Dataset;

/// Errors that can occur while mirroring.
#[derive(Debug, thiserror::Error)]
pub enum MirrorError {
    #[error("A password is required to download the corpus")]
    MissingCredential,

    #[error("Server did not report a size for {url}")]
    MissingContentLength { url: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MirrorError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MirrorError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Remaining number of bytes the mirror may still fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Budget {
    #[default]
    Unbounded,
    Limited(u64),
}

impl Budget {
    pub fn from_limit(limit: Option<u64>) -> Self {
        limit.map_or(Budget::Unbounded, Budget::Limited)
    }

    /// Whether a file of `size` bytes may still be fetched.
    pub fn allows(&self, size: u64) -> bool {
        match self {
            Budget::Unbounded => true,
            Budget::Limited(remaining) => size <= *remaining,
        }
    }

    /// Budget left after receiving `bytes`.
    ///
    /// Servers can send more than they advertised, so this saturates at zero.
    #[must_use]
    pub fn spend(self, bytes: u64) -> Self {
        match self {
            Budget::Unbounded => Budget::Unbounded,
            Budget::Limited(remaining) => Budget::Limited(remaining.saturating_sub(bytes)),
        }
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Budget::Unbounded => write!(f, "unbounded"),
            Budget::Limited(bytes) => write!(f, "{}", format_size(*bytes, BINARY)),
        }
    }
}

/// How a mirror run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorOutcome {
    /// Everything was visited. Carries the unused budget.
    Completed(Budget),
    /// Stopped because the next file did not fit in the budget.
    Truncated(Budget),
}

impl MirrorOutcome {
    /// `false` when the caller must stop all further work.
    pub fn should_continue(&self) -> bool {
        matches!(self, MirrorOutcome::Completed(_))
    }

    pub fn remaining(&self) -> Budget {
        match self {
            MirrorOutcome::Completed(budget) | MirrorOutcome::Truncated(budget) => *budget,
        }
    }
}

/// Mirrors remote listings into a local directory.
pub struct Mirror<T: Transport> {
    transport: T,
}

impl<T: Transport> Mirror<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mirror the listing at `url` into `dest`, creating `dest` if needed.
    pub fn run(
        &self,
        url: &str,
        dest: &Path,
        budget: Budget,
    ) -> Result<MirrorOutcome, MirrorError> {
        fs::create_dir_all(dest).map_err(|e| MirrorError::io(dest, e))?;
        self.mirror_dir(&directory_url(url), dest, budget)
    }

    fn mirror_dir(
        &self,
        url: &str,
        dest: &Path,
        mut budget: Budget,
    ) -> Result<MirrorOutcome, MirrorError> {
        let page = self.transport.get_listing(url)?;
        let listing = Listing::parse(&page);
        debug!(
            "{}: {} files, {} subdirectories",
            url,
            listing.files.len(),
            listing.subdirs.len()
        );

        for file in &listing.files {
            let local = dest.join(file);
            if local.is_file() {
                info!("Already got {}. Skipping...", local.display());
                continue;
            }

            let file_url = format!("{}{}", url, file);
            let size = self.transport.content_length(&file_url)?;
            if !budget.allows(size) {
                warn!(
                    "Bytes limit would be breached. Stopping before downloading {}-byte file {}.",
                    size, file_url
                );
                return Ok(MirrorOutcome::Truncated(budget));
            }

            if let Budget::Limited(remaining) = budget {
                info!("{} bytes to go. Downloading {}.", remaining, file_url);
            } else {
                info!("Downloading {}.", file_url);
            }
            let received = self.transport.download(&file_url, &local)?;
            budget = budget.spend(received);
        }

        for subdir in &listing.subdirs {
            let local = dest.join(subdir.trim_end_matches('/'));
            if !local.is_dir() {
                fs::create_dir(&local).map_err(|e| MirrorError::io(&local, e))?;
            }

            match self.mirror_dir(&format!("{}{}", url, subdir), &local, budget)? {
                MirrorOutcome::Completed(left) => budget = left,
                truncated @ MirrorOutcome::Truncated(_) => return Ok(truncated),
            }
        }

        Ok(MirrorOutcome::Completed(budget))
    }
}

impl Dataset {
    /// Mirror the listing at `url` into this dataset's root.
    pub fn download<T: Transport>(
        &self,
        mirror: &Mirror<T>,
        url: &str,
        budget: Budget,
    ) -> Result<MirrorOutcome, MirrorError> {
        mirror.run(url, self.root(), budget)
    }
}

/// Listing URLs are joined by concatenation, so they need a trailing slash.
fn directory_url(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}
