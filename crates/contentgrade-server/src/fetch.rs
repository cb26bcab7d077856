//! Page fetching for URL grading requests.
//!
//! [`PageFetcher`] is the seam between the grading pipeline and the network;
//! [`HttpPageFetcher`] is the reqwest-backed implementation.

use async_trait::async_trait;
use thiserror::Error;

/// Why a page could not be fetched.
///
/// An HTTP error status is not a failure: the error page's body is returned
/// and graded like any other page.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// Connection, TLS, invalid URL, or body read failure.
    #[error("page fetch failed: {0}")]
    Transport(String),
}

/// Fetches the raw body of a page, whatever its status.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Plain unauthenticated GET over a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpPageFetcher {
    client: reqwest::Client,
}

impl HttpPageFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        HttpPageFetcher { client }
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%status, url, "page answered with error status; grading its body");
        }

        response
            .text()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))
    }
}
