//! Recursive collection of corpus files by type.
//!
//! Unlike session traversal this ignores the corpus layout entirely and walks
//! every subdirectory under the root.

use std::collections::BTreeMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;
use walkdir::WalkDir;

use crate::error::{CorpusError, Result};

/// File types the collector knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// Text report.
    Txt,
    /// EEG record in EDF.
    Edf,
    /// EEG record in EEGLAB's set format.
    Set,
}

impl FileKind {
    pub const ALL: [FileKind; 3] = [FileKind::Txt, FileKind::Edf, FileKind::Set];

    pub fn extension(&self) -> &'static str {
        match self {
            FileKind::Txt => "txt",
            FileKind::Edf => "edf",
            FileKind::Set => "set",
        }
    }

    /// Parse a list of user-supplied kind names, rejecting unknown ones.
    pub fn parse_list<S: AsRef<str>>(names: &[S]) -> Result<Vec<FileKind>> {
        names.iter().map(|n| n.as_ref().parse()).collect()
    }

    fn of(name: &str) -> Option<FileKind> {
        // First match wins, in txt, edf, set order
        Self::ALL
            .into_iter()
            .find(|kind| name.ends_with(&format!(".{}", kind.extension())))
    }
}

impl FromStr for FileKind {
    type Err = CorpusError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "txt" => Ok(FileKind::Txt),
            "edf" => Ok(FileKind::Edf),
            "set" => Ok(FileKind::Set),
            other => Err(CorpusError::UnknownFileType(other.to_string())),
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Collect every file of the requested kinds under `root`.
///
/// With `kinds` of `None` all three kinds are collected. The result has an
/// entry, possibly empty, for each requested kind and no others.
pub fn collect_files(
    root: &Path,
    kinds: Option<&[FileKind]>,
) -> Result<BTreeMap<FileKind, Vec<PathBuf>>> {
    let kinds = kinds.unwrap_or(&FileKind::ALL);
    let mut files: BTreeMap<FileKind, Vec<PathBuf>> =
        kinds.iter().map(|kind| (*kind, Vec::new())).collect();

    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            let source = e.into_io_error().unwrap_or_else(|| {
                io::Error::new(io::ErrorKind::Other, "filesystem loop detected")
            });
            CorpusError::io(path, source)
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let kind = entry.file_name().to_str().and_then(FileKind::of);
        if let Some(list) = kind.and_then(|k| files.get_mut(&k)) {
            list.push(entry.into_path());
        }
    }

    Ok(files)
}
