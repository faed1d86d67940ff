//! Records command handler

use anyhow::Result;
use std::io::{self, Write};
use std::path::PathBuf;

use tueg::{Config, Dataset};

use super::{or_dash, resolve_root};

/// List every EEG record under a dataset root.
#[cfg(not(tarpaulin_include))]
pub fn handle(root: Option<PathBuf>, json: bool) -> Result<()> {
    let config = Config::load()?;
    let dataset = Dataset::new(resolve_root(root, &config));
    let mut out = io::stdout().lock();
    let count = write_records(&dataset, json, &mut out)?;
    if !json {
        writeln!(out)?;
        writeln!(out, "Records: {}", count)?;
    }
    Ok(())
}

/// Stream records to `out` as a table or JSON lines.
pub(crate) fn write_records(
    dataset: &Dataset,
    json: bool,
    out: &mut impl Write,
) -> Result<usize> {
    let mut count = 0;
    for record in dataset.records()? {
        let record = record?;
        if json {
            writeln!(out, "{}", serde_json::to_string(&record)?)?;
        } else {
            let date = record
                .date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string());
            writeln!(
                out,
                "{:<10} {:<6} {:<6} {} {}",
                or_dash(record.subject_id()),
                or_dash(record.session_number()),
                or_dash(record.token()),
                date,
                record.path.display()
            )?;
        }
        count += 1;
    }
    Ok(count)
}
