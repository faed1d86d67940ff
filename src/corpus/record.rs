//! Record and report locators: the leaves of the corpus tree.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;

use super::ids::{RecordId, SessionId};
use crate::error::Result;
use crate::report::{Demographics, DemographicsSource};

/// Location and parsed identity of a single EEG record file.
///
/// Identity is best-effort: a file whose name or parent directory does not
/// follow the corpus naming convention still becomes a locator, just with
/// the corresponding fields left empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordLocator {
    pub path: PathBuf,
    pub date: Option<NaiveDate>,
    pub identity: Option<RecordId>,
}

impl RecordLocator {
    /// Build a locator from a record path.
    ///
    /// Fails only when the parent directory has the four-part session shape
    /// but its date parts are not a valid date.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let date = match parent_segment(&path) {
            Some(segment) => SessionId::parse(segment, &path)?.map(|id| id.date),
            None => None,
        };

        let identity = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(RecordId::parse);

        Ok(Self {
            path,
            date,
            identity,
        })
    }

    pub fn subject_id(&self) -> Option<&str> {
        self.identity.as_ref().map(|id| id.subject_id.as_str())
    }

    pub fn session_number(&self) -> Option<&str> {
        self.identity.as_ref().map(|id| id.session_number.as_str())
    }

    pub fn token(&self) -> Option<&str> {
        self.identity.as_ref().map(|id| id.token.as_str())
    }
}

fn parent_segment(path: &Path) -> Option<&str> {
    path.parent()?.file_name()?.to_str()
}

/// Location of a textual EEG report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLocator {
    pub path: PathBuf,
}

impl ReportLocator {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the patient's age and sex through a report reader.
    pub fn demographics(&self, source: &dyn DemographicsSource) -> anyhow::Result<Demographics> {
        let (age, sex) = source.read_demographics(&self.path)?;
        Ok(Demographics::from_raw(&age, &sex))
    }
}
