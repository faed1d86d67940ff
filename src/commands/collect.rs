//! Collect command handler

use anyhow::Result;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tueg::{collect_files, Config, FileKind};

use super::resolve_root;

/// Recursively collect files by type.
#[cfg(not(tarpaulin_include))]
pub fn handle(root: Option<PathBuf>, types: &[String], paths: bool) -> Result<()> {
    let config = Config::load()?;
    let root = resolve_root(root, &config);
    let mut out = io::stdout().lock();
    write_collection(&root, types, paths, &mut out)
}

/// Collect and print either per-type counts or every matching path.
///
/// Unknown type names are rejected before the directory is scanned.
pub(crate) fn write_collection(
    root: &Path,
    types: &[String],
    paths: bool,
    out: &mut impl Write,
) -> Result<()> {
    let kinds = if types.is_empty() {
        None
    } else {
        Some(FileKind::parse_list(types)?)
    };

    let files = collect_files(root, kinds.as_deref())?;
    for (kind, list) in &files {
        if paths {
            for path in list {
                writeln!(out, "{}", path.display())?;
            }
        } else {
            writeln!(out, "{}: {}", kind, list.len())?;
        }
    }
    Ok(())
}
