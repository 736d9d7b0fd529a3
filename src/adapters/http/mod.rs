//! Artifact retrieval over HTTP(S) using reqwest.

use std::io::{self, Write};
use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::domain::{AppError, FetchConfig};
use crate::ports::ArtifactFetcher;

const USER_AGENT: &str = concat!("envstage/", env!("CARGO_PKG_VERSION"));

/// HTTP transport for artifact downloads.
///
/// Performs a single GET per call and never retries. The response body is
/// copied to the sink in chunks as it arrives.
#[derive(Debug, Clone)]
pub struct HttpArtifactFetcher {
    client: Client,
}

impl HttpArtifactFetcher {
    /// Create a new HTTP client honoring the configured timeout.
    pub fn new(config: &FetchConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::HttpClient(e.to_string()))?;

        Ok(Self { client })
    }
}

impl ArtifactFetcher for HttpArtifactFetcher {
    fn fetch(&self, url: &Url, sink: &mut dyn Write) -> Result<u64, AppError> {
        let failure = |details: String| AppError::Download { url: url.to_string(), details };

        tracing::debug!(%url, "sending request");
        let mut response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| failure(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(failure(format!("HTTP status {}", status)));
        }

        let bytes = io::copy(&mut response, sink)
            .map_err(|e| failure(format!("Failed to stream response body: {}", e)))?;
        tracing::debug!(%url, bytes, "response body streamed");
        Ok(bytes)
    }
}
