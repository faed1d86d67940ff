//! Parsing of the fixed-format names used throughout the corpus.
//!
//! - Version exports: `v<digits>.<digits>.<digits>` (e.g. `v2.0.0`)
//! - Session directories: `<session>_<year>_<month>_<day>` (e.g. `s001_2020_07_15`)
//! - Record files: `<subject>_<session>_<token>.<ext>` (e.g. `00000258_s002_t000.edf`)

use std::path::Path;
use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;

use crate::error::{CorpusError, Result};

/// Number of `_`-delimited parts in a session name.
const SESSION_PARTS: usize = 4;

/// Number of `_`-delimited parts in a record file name.
const RECORD_PARTS: usize = 3;

fn version_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^v\d+\.\d+\.\d+$").expect("version pattern is valid"))
}

/// Whether a directory name looks like a versioned corpus export.
pub fn is_version_name(name: &str) -> bool {
    version_pattern().is_match(name)
}

/// Session number and date parsed from a session directory name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionId {
    pub number: String,
    pub date: NaiveDate,
}

impl SessionId {
    /// Parse a session name, returning `Ok(None)` when it does not have exactly
    /// four parts.
    ///
    /// `path` is only used to give errors some context.
    pub fn parse(segment: &str, path: &Path) -> Result<Option<Self>> {
        let parts: Vec<&str> = segment.split('_').collect();
        if parts.len() != SESSION_PARTS {
            return Ok(None);
        }

        let date = parse_date(parts[1], parts[2], parts[3]).map_err(|reason| {
            CorpusError::InvalidDate {
                path: path.to_path_buf(),
                segment: segment.to_string(),
                reason,
            }
        })?;

        Ok(Some(Self {
            number: parts[0].to_string(),
            date,
        }))
    }
}

fn parse_date(year: &str, month: &str, day: &str) -> std::result::Result<NaiveDate, String> {
    let year: i32 = year
        .trim()
        .parse()
        .map_err(|_| format!("year '{}' is not a number", year))?;
    let month: u32 = month
        .trim()
        .parse()
        .map_err(|_| format!("month '{}' is not a number", month))?;
    let day: u32 = day
        .trim()
        .parse()
        .map_err(|_| format!("day '{}' is not a number", day))?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| format!("{:04}-{:02}-{:02} is not a calendar date", year, month, day))
}

/// Subject, session and token parsed from a record file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordId {
    pub subject_id: String,
    pub session_number: String,
    pub token: String,
}

impl RecordId {
    /// Parse a record file name. Anything but three parts gives `None`.
    pub fn parse(file_name: &str) -> Option<Self> {
        let parts: Vec<&str> = file_name.split('_').collect();
        if parts.len() != RECORD_PARTS {
            return None;
        }

        // Drop the extension: only the text before the first '.' is the token
        let token = parts[2].split('.').next().unwrap_or_default();

        Some(Self {
            subject_id: parts[0].to_string(),
            session_number: parts[1].to_string(),
            token: token.to_string(),
        })
    }
}
