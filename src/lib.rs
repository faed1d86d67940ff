//! TUEG tools library
//!
//! Navigation of the Temple University EEG corpus on disk, and mirroring of
//! the corpus from its password-protected download server.
//!
//! ```no_run
//! use tueg::Dataset;
//!
//! let dataset = Dataset::new("/data/tueg");
//! for record in dataset.records()? {
//!     let record = record?;
//!     println!("{} {:?}", record.path.display(), record.date);
//! }
//! # Ok::<(), tueg::CorpusError>(())
//! ```

pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod mirror;
pub mod report;

pub use config::Config;
pub use corpus::{
    collect_files, Dataset, FileKind, Layout, RecordLocator, ReportLocator, SessionLocator,
    TraversalMode,
};
pub use error::CorpusError;
pub use mirror::{Budget, Credentials, HttpTransport, Mirror, MirrorError, MirrorOutcome};
pub use report::{Demographics, DemographicsSource};
