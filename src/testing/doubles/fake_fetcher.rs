//! Test double for `ArtifactFetcher`.

use std::collections::HashMap;
use std::io::Write;
use std::sync::Mutex;

use url::Url;

use crate::domain::AppError;
use crate::ports::ArtifactFetcher;

#[derive(Debug, Clone)]
pub enum FakeResponse {
    Body(Vec<u8>),
    Status(u16),
    /// Writes the partial body, then fails as if the connection dropped.
    Interrupted(Vec<u8>),
}

/// Scripted fetcher that records every URL it is asked for.
#[derive(Debug, Default)]
pub struct FakeFetcher {
    responses: HashMap<String, FakeResponse>,
    pub requests: Mutex<Vec<Url>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, url: &str, body: &str) -> Self {
        self.responses.insert(url.to_string(), FakeResponse::Body(body.as_bytes().to_vec()));
        self
    }

    pub fn with_status(mut self, url: &str, status: u16) -> Self {
        self.responses.insert(url.to_string(), FakeResponse::Status(status));
        self
    }

    pub fn with_interrupted(mut self, url: &str, partial: &str) -> Self {
        self.responses
            .insert(url.to_string(), FakeResponse::Interrupted(partial.as_bytes().to_vec()));
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl ArtifactFetcher for FakeFetcher {
    fn fetch(&self, url: &Url, sink: &mut dyn Write) -> Result<u64, AppError> {
        self.requests.lock().unwrap().push(url.clone());
        let failure = |details: String| AppError::Download { url: url.to_string(), details };

        match self.responses.get(url.as_str()) {
            Some(FakeResponse::Body(body)) => {
                sink.write_all(body)?;
                Ok(body.len() as u64)
            }
            Some(FakeResponse::Status(code)) => Err(failure(format!("HTTP status {}", code))),
            Some(FakeResponse::Interrupted(partial)) => {
                sink.write_all(partial)?;
                Err(failure("Failed to stream response body: connection reset".to_string()))
            }
            None => Err(failure("HTTP request failed: connection refused".to_string())),
        }
    }
}
