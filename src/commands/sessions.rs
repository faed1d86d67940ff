//! Sessions command handler

use anyhow::Result;
use std::io::{self, Write};
use std::path::PathBuf;

use tueg::{Config, Dataset};

use super::resolve_root;

/// List every recording session under a dataset root.
#[cfg(not(tarpaulin_include))]
pub fn handle(root: Option<PathBuf>, json: bool) -> Result<()> {
    let config = Config::load()?;
    let dataset = Dataset::new(resolve_root(root, &config));
    let mut out = io::stdout().lock();
    let count = write_sessions(&dataset, json, &mut out)?;
    if !json {
        writeln!(out)?;
        writeln!(out, "Sessions: {}", count)?;
    }
    Ok(())
}

/// Stream sessions to `out` as a table or JSON lines.
///
/// Stops at the first malformed session directory and returns its error.
pub(crate) fn write_sessions(
    dataset: &Dataset,
    json: bool,
    out: &mut impl Write,
) -> Result<usize> {
    let mut count = 0;
    for session in dataset.sessions()? {
        let session = session?;
        if json {
            writeln!(out, "{}", serde_json::to_string(&session)?)?;
        } else {
            writeln!(
                out,
                "{:<10} {:<6} {} {}",
                session.subject_id,
                session.session_number,
                session.date.format("%Y-%m-%d"),
                session.path.display()
            )?;
        }
        count += 1;
    }
    Ok(count)
}
