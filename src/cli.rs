//! CLI definitions for tueg
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for man page generation.

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell as CompletionShell;
use std::path::PathBuf;

/// Build clap styles for consistent CLI appearance.
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "tueg")]
#[command(about = "[ TUEG tools ] - navigate and mirror the Temple University EEG corpus")]
#[command(
    long_about = "TUEG tools - navigate and mirror the Temple University EEG corpus.

The corpus is published in several directory layouts (the full corpus and
evaluation subsets). tueg detects the layout of every export under a dataset
root and lists its sessions and records uniformly.

QUICK START:
    tueg layout ~/tueg                 Show which exports were found
    tueg sessions ~/tueg               List recording sessions
    tueg records ~/tueg --json         List records as JSON lines
    tueg collect ~/tueg -t edf         Count EDF files anywhere under a root
    tueg download --max-bytes 1000000000
                                       Mirror the first 1 GB of the corpus

The dataset root defaults to [dataset].directory in ~/.config/tueg/config.toml."
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the layout detected for each export under a dataset root
    #[command(long_about = "Show the layout detected for each export under a dataset root.

Only top-level entries named like a version (v2.0.0) or 'normal'/'abnormal'
are exports. Everything else is ignored.

LAYOUTS:
    full             v*/edf/<montage>/<bucket>/<subject>/<session>
    split-by-class   v*/edf/<split>/<class>/<montage>/...
    class-rooted     {normal,abnormal}/edf/{eval,train}/<montage>/...")]
    Layout {
        /// Dataset root (defaults to the configured directory)
        root: Option<PathBuf>,
    },

    /// List recording sessions
    #[command(long_about = "List every recording session under a dataset root.

Sessions are listed in filesystem order. A session directory whose name
is not <session>_<year>_<month>_<day> stops the listing with an error.

EXAMPLES:
    tueg sessions                    Sessions under the configured root
    tueg sessions /data/tueg --json  One JSON object per line")]
    Sessions {
        /// Dataset root (defaults to the configured directory)
        root: Option<PathBuf>,
        /// Print one JSON object per line
        #[arg(long)]
        json: bool,
    },

    /// List EEG records
    #[command(long_about = "List every EEG record (.edf) under a dataset root.

Records are listed session by session. Subject, session and token are
parsed from <subject>_<session>_<token>.edf and left empty when the file
name has another shape.

EXAMPLES:
    tueg records
    tueg records /data/tueg --json")]
    Records {
        /// Dataset root (defaults to the configured directory)
        root: Option<PathBuf>,
        /// Print one JSON object per line
        #[arg(long)]
        json: bool,
    },

    /// Collect files by type anywhere under a directory
    #[command(long_about = "Recursively collect files by type, ignoring the corpus layout.

EXAMPLES:
    tueg collect                     Count txt, edf and set files
    tueg collect -t edf --paths      Print the path of every EDF file")]
    Collect {
        /// Directory to search (defaults to the configured dataset root)
        root: Option<PathBuf>,
        /// File type to collect: txt, edf or set (repeatable, default all)
        #[arg(short = 't', long = "type")]
        types: Vec<String>,
        /// Print paths instead of counts
        #[arg(long)]
        paths: bool,
    },

    /// Mirror the corpus from its download server
    #[command(long_about = "Mirror a remote directory listing into a local directory.

Files that already exist locally are skipped, so an interrupted or
truncated download can be resumed by running the same command again.
With --max-bytes the mirror stops before the first file that would
exceed the budget.

EXAMPLES:
    tueg download --password secret
    TUEG_PASSWORD=secret tueg download --max-bytes 100000000000
    tueg download https://host/tuh_eeg_abnormal/ --dest /data/tuab")]
    Download {
        /// Listing URL (defaults to [download].url)
        url: Option<String>,
        /// Local directory (defaults to the configured dataset root)
        #[arg(long)]
        dest: Option<PathBuf>,
        /// Account name (defaults to [download].username)
        #[arg(long, short)]
        username: Option<String>,
        /// Account password
        #[arg(long, env = "TUEG_PASSWORD", hide_env_values = true)]
        password: Option<String>,
        /// Stop before downloading more than this many bytes
        #[arg(long)]
        max_bytes: Option<u64>,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Print the configuration file path
    Path,
}
