//! Physical layouts the corpus is distributed in.
//!
//! Every top-level entry of a dataset root is classified on its own, so a
//! single root can hold several exports side by side:
//!
//! ```text
//! root/
//!   v2.0.0/edf/<montage>/<bucket>/<subject>/<session>/          Full
//!   v2.0.0/edf/<split>/<class>/<montage>/...                    SplitByClass
//!   abnormal/edf/{eval,train}/<montage>/<bucket>/<subject>/...  ClassRooted
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::ids::is_version_name;

/// Directory holding the EDF tree inside every export.
pub const EDF_DIR: &str = "edf";

/// Marker whose presence under `edf/` identifies the split-by-class export.
pub const EVAL_MARKER: &str = "eval";

const SPLITS: &[&str] = &["eval", "train"];
const CLASSES: &[&str] = &["normal", "abnormal"];

/// Filter applied to the children of one directory level during descent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Any subdirectory.
    Any,
    /// Only subdirectories with one of these names.
    OneOf(&'static [&'static str]),
}

impl Level {
    pub fn admits(&self, name: &str) -> bool {
        match self {
            Level::Any => true,
            Level::OneOf(names) => names.contains(&name),
        }
    }
}

/// Levels below `edf/` for each layout. The last level is the session.
const FULL_DESCENT: &[Level] = &[Level::Any, Level::Any, Level::Any, Level::Any];
const SPLIT_BY_CLASS_DESCENT: &[Level] = &[
    Level::Any,
    Level::Any,
    Level::Any,
    Level::Any,
    Level::Any,
    Level::Any,
];
const CLASS_ROOTED_DESCENT: &[Level] = &[
    Level::OneOf(SPLITS),
    Level::Any,
    Level::Any,
    Level::Any,
    Level::Any,
];

/// The known ways the corpus is laid out on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Versioned export with `edf/<split>/<class>` nesting, usually
    /// `{eval,train}/{normal,abnormal}`.
    SplitByClass,
    /// Versioned export of the full corpus.
    Full,
    /// Export rooted at a `normal`/`abnormal` directory, split only by eval/train.
    ClassRooted,
}

impl Layout {
    /// Classify a top-level entry by name.
    ///
    /// `has_eval_marker` is only consulted for versioned names, so callers can
    /// defer the filesystem check until it matters.
    pub fn classify(name: &str, has_eval_marker: impl FnOnce() -> bool) -> Option<Layout> {
        if is_version_name(name) {
            if has_eval_marker() {
                Some(Layout::SplitByClass)
            } else {
                Some(Layout::Full)
            }
        } else if CLASSES.contains(&name) {
            Some(Layout::ClassRooted)
        } else {
            None
        }
    }

    /// Directory levels to descend below `edf/`, ending at session directories.
    pub fn descent(&self) -> &'static [Level] {
        match self {
            Layout::SplitByClass => SPLIT_BY_CLASS_DESCENT,
            Layout::Full => FULL_DESCENT,
            Layout::ClassRooted => CLASS_ROOTED_DESCENT,
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Layout::SplitByClass => "split-by-class",
            Layout::Full => "full",
            Layout::ClassRooted => "class-rooted",
        };
        write!(f, "{}", name)
    }
}

/// A top-level entry of a dataset root together with its layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Export {
    pub path: PathBuf,
    pub layout: Layout,
}

impl Export {
    /// Root of the EDF tree the descent starts from.
    pub fn edf_dir(&self) -> PathBuf {
        self.path.join(EDF_DIR)
    }
}

/// Detect the layout of one top-level entry, or `None` if it is not an export.
pub fn detect(entry: &Path) -> Option<Export> {
    if !entry.is_dir() {
        return None;
    }
    let name = entry.file_name()?.to_str()?;
    let layout = Layout::classify(name, || entry.join(EDF_DIR).join(EVAL_MARKER).is_dir())?;
    Some(Export {
        path: entry.to_path_buf(),
        layout,
    })
}
