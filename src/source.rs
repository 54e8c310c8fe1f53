//! Workbook locations and the credentials used to reach remote ones.

use crate::error::ReportError;
use std::fmt::Debug;
use std::fmt::Display;
use std::io::BufRead;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// HTTP Basic authentication pair.
///
/// Only constructed when both parts are non-empty, a half-filled pair means
/// "no authentication".
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: &str, password: &str) -> Option<Self> {
        if username.is_empty() || password.is_empty() {
            None
        } else {
            Some(Self {
                username: username.to_owned(),
                password: password.to_owned(),
            })
        }
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Supplies optional credentials for remote workbooks.
pub trait CredentialProvider {
    fn credentials(&mut self) -> Result<Option<Credentials>, ReportError>;
}

/// Credentials taken from command-line flags or environment variables.
#[derive(Debug, Default)]
pub struct StaticCredentials {
    username: Option<String>,
    password: Option<String>,
}

impl StaticCredentials {
    pub fn new(username: Option<String>, password: Option<String>) -> Self {
        Self { username, password }
    }
}

impl CredentialProvider for StaticCredentials {
    fn credentials(&mut self) -> Result<Option<Credentials>, ReportError> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Ok(Credentials::new(username, password)),
            _ => Ok(None),
        }
    }
}

/// Asks for a username and password on an interactive stream.
pub struct PromptCredentials<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptCredentials<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, prompt: &str) -> Result<String, ReportError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(answer.trim_end_matches(['\r', '\n']).to_owned())
    }
}

impl<R: BufRead, W: Write> CredentialProvider for PromptCredentials<R, W> {
    fn credentials(&mut self) -> Result<Option<Credentials>, ReportError> {
        let username = self.ask("Enter your username: ")?;
        let password = self.ask("Enter your password: ")?;
        Ok(Credentials::new(username.trim(), &password))
    }
}

/// Remote workbook fetched over HTTP(S).
#[derive(Clone, Debug)]
pub struct RemoteSource {
    pub url: Url,
    pub credentials: Option<Credentials>,
    pub timeout: Duration,
}

/// Where a workbook is read from.
#[derive(Clone, Debug)]
pub enum Source {
    Local(PathBuf),
    Remote(RemoteSource),
}

impl Source {
    /// Resolves a user-supplied location.
    ///
    /// `http`/`https` URLs become remote sources and are the only case in
    /// which `provider` is consulted. `file://` URLs and everything else are
    /// treated as local paths.
    pub fn resolve(
        location: &str,
        provider: &mut dyn CredentialProvider,
        timeout: Duration,
    ) -> Result<Source, ReportError> {
        match Url::parse(location) {
            Ok(url) if Self::is_remote_url(&url) => Ok(Source::Remote(RemoteSource {
                url,
                credentials: provider.credentials()?,
                timeout,
            })),
            Ok(url) if url.scheme() == "file" => url
                .to_file_path()
                .map(Source::Local)
                .map_err(|_| ReportError::WithContextError(format!("Invalid file URL '{location}'"))),
            _ => Ok(Source::Local(PathBuf::from(location))),
        }
    }

    pub fn is_remote_url(url: &Url) -> bool {
        matches!(url.scheme(), "http" | "https")
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Source::Remote(_))
    }
}

impl Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Local(path) => write!(f, "{}", path.display()),
            Source::Remote(remote) => write!(f, "{}", remote.url),
        }
    }
}
