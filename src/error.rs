//! Errors raised while walking a corpus on disk.

use std::path::PathBuf;

/// Errors that can occur during corpus traversal and file collection.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("Path does not end with a valid session ID: {path}")]
    BadSessionId { path: PathBuf },

    #[error("Invalid date in '{segment}' ({path}): {reason}")]
    InvalidDate {
        path: PathBuf,
        segment: String,
        reason: String,
    },

    #[error("Unrecognized file type '{0}' (expected one of: txt, edf, set)")]
    UnknownFileType(String),

    #[error("{operation} is not supported")]
    Unsupported { operation: &'static str },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CorpusError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CorpusError::Io {
            path: path.into(),
            source,
        }
    }

    /// True for the "not supported" family of errors.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, CorpusError::Unsupported { .. })
    }
}

pub type Result<T> = std::result::Result<T, CorpusError>;
