//! TUEG tools - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use tueg::cli::{Cli, Commands, ConfigCommands};

/// Log to stderr so command output on stdout stays machine-readable.
///
/// `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "tueg=info",
        1 => "tueg=debug",
        _ => "tueg=trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Layout { root } => commands::layout::handle(root),
        Commands::Sessions { root, json } => commands::sessions::handle(root, json),
        Commands::Records { root, json } => commands::records::handle(root, json),
        Commands::Collect { root, types, paths } => commands::collect::handle(root, &types, paths),
        Commands::Download {
            url,
            dest,
            username,
            password,
            max_bytes,
        } => commands::download::handle(url, dest, username, password, max_bytes),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
