//! Layout command handler

use anyhow::Result;
use std::io::{self, Write};
use std::path::PathBuf;

use tueg::{Config, Dataset};

use super::resolve_root;

/// Show the layout detected for each export under a dataset root.
#[cfg(not(tarpaulin_include))]
pub fn handle(root: Option<PathBuf>) -> Result<()> {
    let config = Config::load()?;
    let dataset = Dataset::new(resolve_root(root, &config));
    let mut out = io::stdout().lock();
    let count = write_exports(&dataset, &mut out)?;
    if count == 0 {
        writeln!(out, "No corpus exports found in {}", dataset.root().display())?;
    }
    Ok(())
}

/// Write one line per export, returning how many were found.
pub(crate) fn write_exports(dataset: &Dataset, out: &mut impl Write) -> Result<usize> {
    let mut count = 0;
    for export in dataset.exports()? {
        let export = export?;
        writeln!(out, "{:<15} {}", export.layout.to_string(), export.path.display())?;
        count += 1;
    }
    Ok(count)
}
