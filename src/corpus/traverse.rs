//! Lazy traversal of a whole dataset root.
//!
//! Every stream here is a plain [`Iterator`] over `Result` items, produced in
//! filesystem enumeration order (not sorted). The first error ends the
//! stream: a malformed session directory aborts the whole enumeration.

use std::fs;
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use super::layout::{self, Export, Level};
use super::record::{RecordLocator, ReportLocator};
use super::session::{SessionLocator, SessionRecords};
use super::TraversalMode;
use crate::error::{CorpusError, Result};

/// A directory holding one or more corpus exports, in any supported layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    root: PathBuf,
}

impl Dataset {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Top-level entries recognised as corpus exports, with their layouts.
    pub fn exports(&self) -> Result<Exports> {
        let entries = fs::read_dir(&self.root).map_err(|e| CorpusError::io(&self.root, e))?;
        Ok(Exports {
            root: self.root.clone(),
            entries,
        })
    }

    /// Every recording session under the root.
    pub fn sessions(&self) -> Result<Sessions> {
        self.sessions_with_mode(TraversalMode::Sequential)
    }

    pub fn sessions_with_mode(&self, mode: TraversalMode) -> Result<Sessions> {
        mode.require_sequential("non-sequential session iteration")?;
        Ok(Sessions {
            exports: self.exports()?,
            current: None,
            done: false,
        })
    }

    /// Every EEG record under the root, session by session.
    pub fn records(&self) -> Result<CorpusRecords> {
        self.records_with_mode(TraversalMode::Sequential)
    }

    pub fn records_with_mode(&self, mode: TraversalMode) -> Result<CorpusRecords> {
        mode.require_sequential("non-sequential record iteration")?;
        Ok(CorpusRecords {
            sessions: self.sessions()?,
            current: None,
            done: false,
        })
    }

    /// Whole-corpus report iteration. Not implemented.
    pub fn reports(&self) -> Result<CorpusReports> {
        Err(CorpusError::Unsupported {
            operation: "corpus-wide report iteration",
        })
    }

    /// Subject-level iteration. Not implemented.
    pub fn subjects(&self) -> Result<Subjects> {
        Err(CorpusError::Unsupported {
            operation: "subject iteration",
        })
    }
}

/// Recognised exports directly under a dataset root.
pub struct Exports {
    root: PathBuf,
    entries: fs::ReadDir,
}

impl Iterator for Exports {
    type Item = Result<Export>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(CorpusError::io(&self.root, e))),
            };
            let path = entry.path();
            match layout::detect(&path) {
                Some(export) => {
                    debug!("{} uses the {} layout", path.display(), export.layout);
                    return Some(Ok(export));
                }
                None => trace!("Ignoring {}", path.display()),
            }
        }
    }
}

/// Fixed-depth walk yielding the directories found at the last level of a plan.
struct Descent {
    plan: &'static [Level],
    stack: Vec<(PathBuf, fs::ReadDir)>,
}

impl Descent {
    fn new(start: &Path, plan: &'static [Level]) -> Result<Self> {
        let entries = fs::read_dir(start).map_err(|e| CorpusError::io(start, e))?;
        Ok(Self {
            plan,
            stack: vec![(start.to_path_buf(), entries)],
        })
    }
}

impl Iterator for Descent {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let depth = self.stack.len().checked_sub(1)?;
            let (dir, entries) = self.stack.last_mut()?;
            let entry = match entries.next() {
                Some(Ok(entry)) => entry,
                Some(Err(e)) => return Some(Err(CorpusError::io(dir.as_path(), e))),
                None => {
                    self.stack.pop();
                    continue;
                }
            };

            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let level = self.plan[depth];
            if !entry.file_name().to_str().is_some_and(|n| level.admits(n)) {
                trace!("Skipping {} at depth {}", path.display(), depth);
                continue;
            }

            if depth + 1 == self.plan.len() {
                return Some(Ok(path));
            }
            match fs::read_dir(&path) {
                Ok(children) => self.stack.push((path, children)),
                Err(e) => return Some(Err(CorpusError::io(path, e))),
            }
        }
    }
}

/// Every session under a dataset root.
pub struct Sessions {
    exports: Exports,
    current: Option<Descent>,
    done: bool,
}

impl Sessions {
    fn fail(&mut self, err: CorpusError) -> Option<Result<SessionLocator>> {
        self.done = true;
        self.current = None;
        Some(Err(err))
    }
}

impl Iterator for Sessions {
    type Item = Result<SessionLocator>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            if let Some(descent) = self.current.as_mut() {
                match descent.next() {
                    Some(Ok(path)) => match SessionLocator::new(path) {
                        Ok(session) => return Some(Ok(session)),
                        Err(e) => return self.fail(e),
                    },
                    Some(Err(e)) => return self.fail(e),
                    None => self.current = None,
                }
            }

            let export = match self.exports.next() {
                Some(Ok(export)) => export,
                Some(Err(e)) => return self.fail(e),
                None => {
                    self.done = true;
                    return None;
                }
            };
            match Descent::new(&export.edf_dir(), export.layout.descent()) {
                Ok(descent) => self.current = Some(descent),
                Err(e) => return self.fail(e),
            }
        }
    }
}

impl FusedIterator for Sessions {}

/// Every record under a dataset root, flattened across sessions.
pub struct CorpusRecords {
    sessions: Sessions,
    current: Option<SessionRecords>,
    done: bool,
}

impl CorpusRecords {
    fn fail(&mut self, err: CorpusError) -> Option<Result<RecordLocator>> {
        self.done = true;
        self.current = None;
        Some(Err(err))
    }
}

impl Iterator for CorpusRecords {
    type Item = Result<RecordLocator>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            if let Some(records) = self.current.as_mut() {
                match records.next() {
                    Some(Ok(record)) => return Some(Ok(record)),
                    Some(Err(e)) => return self.fail(e),
                    None => self.current = None,
                }
            }

            let session = match self.sessions.next() {
                Some(Ok(session)) => session,
                Some(Err(e)) => return self.fail(e),
                None => {
                    self.done = true;
                    return None;
                }
            };
            match session.records() {
                Ok(records) => self.current = Some(records),
                Err(e) => return self.fail(e),
            }
        }
    }
}

impl FusedIterator for CorpusRecords {}

/// Corpus-wide report stream. Uninhabited until report iteration exists.
pub enum CorpusReports {}

impl Iterator for CorpusReports {
    type Item = Result<ReportLocator>;

    fn next(&mut self) -> Option<Self::Item> {
        match *self {}
    }
}

/// Subject stream. Uninhabited until subject iteration exists.
pub enum Subjects {}

impl Iterator for Subjects {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        match *self {}
    }
}
