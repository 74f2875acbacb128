mod error;

use reqwest::{header, Client, StatusCode};
use tracing::{instrument, Level};
use url::Url;

use crate::config::FetchConfig;
pub use error::FetchError;

/// The fetched page, handed once to the extractor.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub url: Url,
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

#[cfg(test)]
impl RawDocument {
    /// Wraps markup that did not come from the network.
    pub fn from_html(url: Url, body: impl Into<String>) -> Self {
        Self {
            url,
            status: StatusCode::OK,
            content_type: Some("text/html".to_owned()),
            body: body.into(),
        }
    }
}

pub fn make_client(config: &FetchConfig) -> Result<Client, FetchError> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout)
        .gzip(true)
        .build()
        .map_err(FetchError::Client)
}

/// Issues single GET requests through one reusable client.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        Ok(Self {
            client: make_client(config)?,
        })
    }

    #[instrument(skip(self, url), fields(url = %url), level = Level::DEBUG)]
    pub async fn fetch(&self, url: &Url) -> Result<RawDocument, FetchError> {
        let start = std::time::Instant::now();
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.clone(),
                source,
            })?
            .error_for_status()
            .map_err(|source| FetchError::Status {
                url: url.clone(),
                source,
            })?;
        let status = response.status();
        let final_url = response.url().clone();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(ToOwned::to_owned);
        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Request {
                url: url.clone(),
                source,
            })?;
        log::debug!(
            "Got {} bytes ({}) from {final_url} in {:?}",
            body.len(),
            content_type.as_deref().unwrap_or("unknown type"),
            start.elapsed()
        );
        Ok(RawDocument {
            url: final_url,
            status,
            content_type,
            body,
        })
    }
}

/// Shorthand for a single fetch with the given settings.
pub async fn fetch(url: &Url, config: &FetchConfig) -> Result<RawDocument, FetchError> {
    Fetcher::new(config)?.fetch(url).await
}
