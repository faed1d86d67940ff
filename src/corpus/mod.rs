//! Navigating an EEG corpus stored on disk.
//!
//! The corpus is organised as `export → edf → ... → subject → session → record`,
//! with the levels between `edf` and the subject depending on which export it
//! is (see [`layout`]). [`Dataset`] hides those differences and streams
//! sessions and records uniformly.

pub mod collect;
pub mod ids;
pub mod layout;
pub mod record;
pub mod session;
pub mod traverse;

pub use collect::{collect_files, FileKind};
pub use ids::{RecordId, SessionId};
pub use layout::{Export, Layout, Level};
pub use record::{RecordLocator, ReportLocator};
pub use session::{SessionLocator, SessionRecords, SessionReports};
pub use traverse::{CorpusRecords, CorpusReports, Dataset, Exports, Sessions, Subjects};

use crate::error::{CorpusError, Result};

/// Order in which a traversal visits its elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalMode {
    /// Directory enumeration order.
    #[default]
    Sequential,
    /// Randomised order. Not implemented.
    Shuffled,
}

impl TraversalMode {
    pub(crate) fn require_sequential(self, operation: &'static str) -> Result<()> {
        match self {
            TraversalMode::Sequential => Ok(()),
            TraversalMode::Shuffled => Err(CorpusError::Unsupported { operation }),
        }
    }
}
