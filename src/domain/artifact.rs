//! Remote artifacts and the outcome of acquiring them.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use url::Url;

use super::AppError;

const PARTIAL_SUFFIX: &str = ".envstage-part";

/// A downloadable file identified by its source URL.
///
/// Guarantees:
/// - Scheme is `http` or `https`
/// - Final path segment is non-empty and not `.`/`..`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemoteArtifact {
    url: Url,
    file_name: String,
}

impl RemoteArtifact {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let url = Url::parse(raw.trim()).map_err(|e| AppError::InvalidArtifactUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;
        Self::from_url(url)
    }

    pub fn from_url(url: Url) -> Result<Self, AppError> {
        let invalid = |reason: &str| AppError::InvalidArtifactUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        };

        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid("scheme must be http or https"));
        }

        let file_name = url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .filter(|segment| !segment.is_empty() && *segment != "." && *segment != "..")
            .map(str::to_string)
            .ok_or_else(|| invalid("URL path must end with a file name"))?;

        Ok(Self { url, file_name })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Local cache identity: the final path segment of the URL.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Hidden sibling that receives the body until the transfer completes.
    pub fn partial_file_name(&self) -> String {
        format!(".{}{PARTIAL_SUFFIX}", self.file_name)
    }
}

impl fmt::Display for RemoteArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}

impl Serialize for RemoteArtifact {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.url.as_str())
    }
}

impl<'de> Deserialize<'de> for RemoteArtifact {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        RemoteArtifact::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Result of one acquisition attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadStatus {
    /// Destination already existed; no network access happened.
    Cached,
    /// Body was streamed to the destination.
    Downloaded { bytes: u64 },
    /// Transfer failed; nothing was left at the destination.
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOutcome {
    pub url: Url,
    pub destination: PathBuf,
    pub status: DownloadStatus,
}

impl DownloadOutcome {
    pub fn succeeded(&self) -> bool {
        !matches!(self.status, DownloadStatus::Failed { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            DownloadStatus::Failed { error } => Some(error),
            _ => None,
        }
    }
}

/// Outcomes of one fetch batch, in configuration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchReport {
    pub outcomes: Vec<DownloadOutcome>,
}

impl FetchReport {
    pub fn cached(&self) -> usize {
        self.count(|status| matches!(status, DownloadStatus::Cached))
    }

    pub fn downloaded(&self) -> usize {
        self.count(|status| matches!(status, DownloadStatus::Downloaded { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|status| matches!(status, DownloadStatus::Failed { .. }))
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    fn count(&self, predicate: impl Fn(&DownloadStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|outcome| predicate(&outcome.status)).count()
    }
}
