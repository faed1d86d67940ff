//! Recording session directories.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;

use super::ids::SessionId;
use super::record::{RecordLocator, ReportLocator};
use super::TraversalMode;
use crate::error::{CorpusError, Result};

/// Extension of EEG signal files.
pub const RECORD_EXTENSION: &str = ".edf";

/// Extension of textual reports.
pub const REPORT_EXTENSION: &str = ".txt";

/// One recording session: `<subject>/<session>_<year>_<month>_<day>/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionLocator {
    pub path: PathBuf,
    pub subject_id: String,
    pub session_number: String,
    pub date: NaiveDate,
}

impl SessionLocator {
    /// Build a locator for a session directory.
    ///
    /// The directory name must have exactly four `_`-delimited parts, otherwise
    /// this fails with [`CorpusError::BadSessionId`]. The subject id is taken
    /// from the parent directory name as-is.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let bad_id = || CorpusError::BadSessionId { path: path.clone() };

        let segment = path.file_name().and_then(|n| n.to_str()).ok_or_else(bad_id)?;
        let subject_id = path
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .ok_or_else(bad_id)?
            .to_string();
        let id = SessionId::parse(segment, &path)?.ok_or_else(bad_id)?;

        Ok(Self {
            subject_id,
            session_number: id.number,
            date: id.date,
            path,
        })
    }

    /// Lazily list the EEG records directly inside this session.
    pub fn records(&self) -> Result<SessionRecords> {
        self.records_with_mode(TraversalMode::Sequential)
    }

    pub fn records_with_mode(&self, mode: TraversalMode) -> Result<SessionRecords> {
        mode.require_sequential("non-sequential record iteration")?;
        Ok(SessionRecords {
            scan: ExtensionScan::new(&self.path, RECORD_EXTENSION)?,
        })
    }

    /// Lazily list the text reports directly inside this session.
    pub fn reports(&self) -> Result<SessionReports> {
        Ok(SessionReports {
            scan: ExtensionScan::new(&self.path, REPORT_EXTENSION)?,
        })
    }
}

/// Records of a single session, in directory order.
pub struct SessionRecords {
    scan: ExtensionScan,
}

impl Iterator for SessionRecords {
    type Item = Result<RecordLocator>;

    fn next(&mut self) -> Option<Self::Item> {
        self.scan
            .next()
            .map(|path| path.and_then(RecordLocator::new))
    }
}

/// Reports of a single session, in directory order.
pub struct SessionReports {
    scan: ExtensionScan,
}

impl Iterator for SessionReports {
    type Item = Result<ReportLocator>;

    fn next(&mut self) -> Option<Self::Item> {
        self.scan.next().map(|path| path.map(ReportLocator::new))
    }
}

/// Single-level scan yielding the files whose name ends with an extension.
struct ExtensionScan {
    dir: PathBuf,
    entries: fs::ReadDir,
    extension: &'static str,
}

impl ExtensionScan {
    fn new(dir: &Path, extension: &'static str) -> Result<Self> {
        let entries = fs::read_dir(dir).map_err(|e| CorpusError::io(dir, e))?;
        Ok(Self {
            dir: dir.to_path_buf(),
            entries,
            extension,
        })
    }
}

impl Iterator for ExtensionScan {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(CorpusError::io(&self.dir, e))),
            };
            let path = entry.path();
            let matches = entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.ends_with(self.extension));
            if matches && path.is_file() {
                return Some(Ok(path));
            }
        }
    }
}
