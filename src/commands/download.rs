//! Download command handler

use anyhow::Result;
use std::path::PathBuf;

use tueg::{Budget, Config, Credentials, Dataset, HttpTransport, Mirror, MirrorOutcome};

use super::resolve_root;

/// Everything a mirror run needs, resolved from flags and config.
#[derive(Debug)]
pub(crate) struct DownloadRequest {
    pub url: String,
    pub dest: PathBuf,
    pub credentials: Credentials,
    pub budget: Budget,
}

/// Merge command-line flags over the `[download]` config section.
///
/// Fails before any request is made when no password was given.
pub(crate) fn resolve_request(
    url: Option<String>,
    dest: Option<PathBuf>,
    username: Option<String>,
    password: Option<String>,
    max_bytes: Option<u64>,
    config: &Config,
) -> Result<DownloadRequest> {
    let username = username.unwrap_or_else(|| config.download.username.clone());
    let credentials = Credentials::new(username, password)?;
    Ok(DownloadRequest {
        url: url.unwrap_or_else(|| config.download.url.clone()),
        dest: resolve_root(dest, config),
        credentials,
        budget: max_bytes.map(Budget::Limited).unwrap_or_else(|| config.download_budget()),
    })
}

/// Mirror the corpus into the dataset root.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    url: Option<String>,
    dest: Option<PathBuf>,
    username: Option<String>,
    password: Option<String>,
    max_bytes: Option<u64>,
) -> Result<()> {
    let config = Config::load()?;
    let request = resolve_request(url, dest, username, password, max_bytes, &config)?;

    println!("Mirroring {}", request.url);
    println!("       to {}", request.dest.display());
    println!("   budget {}", request.budget);

    let transport = HttpTransport::new(request.credentials, config.download_timeout())?;
    let mirror = Mirror::new(transport);
    let outcome = Dataset::new(&request.dest).download(&mirror, &request.url, request.budget)?;

    println!();
    match outcome {
        MirrorOutcome::Completed(left) => println!("Download complete ({} left)", left),
        MirrorOutcome::Truncated(left) => {
            println!("Stopped at the byte limit ({} left)", left);
            println!("Run again with a larger --max-bytes to continue.");
        }
    }
    Ok(())
}
