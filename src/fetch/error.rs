use std::fmt::{self, Display, Formatter};

use reqwest::StatusCode;
use url::Url;

/// Failure to retrieve the restaurant page. Never retried.
#[derive(Debug)]
pub enum FetchError {
    /// The HTTP client could not be built.
    Client(reqwest::Error),
    /// Transport failure: DNS, refused connection, timeout, broken body.
    Request { url: Url, source: reqwest::Error },
    /// The server answered with a non-success status.
    Status { url: Url, source: reqwest::Error },
}

impl FetchError {
    const fn source_ref(&self) -> &reqwest::Error {
        match self {
            Self::Client(source) | Self::Request { source, .. } | Self::Status { source, .. } => {
                source
            }
        }
    }

    pub fn is_timeout(&self) -> bool {
        self.source_ref().is_timeout()
    }

    pub fn status(&self) -> Option<StatusCode> {
        self.source_ref().status()
    }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Client(_) => write!(f, "Failed to build HTTP client"),
            Self::Request { url, .. } => write!(f, "Failed to fetch menu from {url}"),
            Self::Status { url, source } => match source.status() {
                Some(status) => write!(f, "Menu page {url} returned {status}"),
                None => write!(f, "Menu page {url} returned an error status"),
            },
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source_ref())
    }
}
