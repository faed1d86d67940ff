//! Config subcommands handler

use anyhow::Result;
use std::io::{self, Write};

use tueg::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    write_config(&config, &mut io::stdout().lock())
}

/// Print the configuration file path.
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

pub(crate) fn write_config(config: &Config, out: &mut impl Write) -> Result<()> {
    let toml_str = toml::to_string_pretty(config)?;
    write!(out, "{}", toml_str)?;
    Ok(())
}
