//! HTTP access to the remote corpus.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::CONTENT_LENGTH;

use super::MirrorError;

const USER_AGENT: &str = concat!("tueg/", env!("CARGO_PKG_VERSION"));

/// The three requests the mirror needs from a remote server.
pub trait Transport {
    /// Fetch the HTML listing of a directory URL.
    fn get_listing(&self, url: &str) -> Result<String, MirrorError>;

    /// Advertised size of a file, without downloading it.
    fn content_length(&self, url: &str) -> Result<u64, MirrorError>;

    /// Download a file to `dest`, returning the number of bytes received.
    fn download(&self, url: &str, dest: &Path) -> Result<u64, MirrorError>;
}

/// Basic-auth credentials for the corpus server.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    password: String,
}

impl Credentials {
    /// Build credentials, rejecting a missing or empty password.
    pub fn new(
        username: impl Into<String>,
        password: Option<String>,
    ) -> Result<Self, MirrorError> {
        match password {
            Some(password) if !password.is_empty() => Ok(Self {
                username: username.into(),
                password,
            }),
            _ => Err(MirrorError::MissingCredential),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// [`Transport`] over HTTPS with basic authentication.
pub struct HttpTransport {
    client: Client,
    credentials: Credentials,
}

impl HttpTransport {
    /// Create a transport. With `timeout` of `None` requests never time out,
    /// which large EDF files usually need.
    pub fn new(credentials: Credentials, timeout: Option<Duration>) -> Result<Self, MirrorError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            credentials,
        })
    }

    fn authed(&self, request: RequestBuilder) -> RequestBuilder {
        request.basic_auth(&self.credentials.username, Some(&self.credentials.password))
    }
}

impl Transport for HttpTransport {
    fn get_listing(&self, url: &str) -> Result<String, MirrorError> {
        let response = self.authed(self.client.get(url)).send()?.error_for_status()?;
        Ok(response.text()?)
    }

    fn content_length(&self, url: &str) -> Result<u64, MirrorError> {
        let response = self.authed(self.client.head(url)).send()?.error_for_status()?;
        response
            .headers()
            .get(CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse().ok())
            .ok_or_else(|| MirrorError::MissingContentLength {
                url: url.to_string(),
            })
    }

    fn download(&self, url: &str, dest: &Path) -> Result<u64, MirrorError> {
        let mut response = self.authed(self.client.get(url)).send()?.error_for_status()?;

        // Stream to a side file and rename it once the body is complete
        let partial = partial_path(dest);
        let file = File::create(&partial).map_err(|e| MirrorError::io(&partial, e))?;
        let mut writer = BufWriter::new(file);
        let received = response.copy_to(&mut writer)?;
        writer.flush().map_err(|e| MirrorError::io(&partial, e))?;
        drop(writer);

        fs::rename(&partial, dest).map_err(|e| MirrorError::io(dest, e))?;
        Ok(received)
    }
}

fn partial_path(dest: &Path) -> PathBuf {
    let mut name = dest.as_os_str().to_owned();
    name.push(".part");
    PathBuf::from(name)
}
