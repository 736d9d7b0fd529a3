use std::io;

use thiserror::Error;

/// Library-wide error type for envstage operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration file given explicitly but absent.
    #[error("Config file not found: {0}")]
    ConfigFileMissing(String),

    /// Mutation requested outside the repository root.
    #[error("Path escapes repository root: {0}")]
    PathTraversal(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Artifact URL cannot be used as a cache entry.
    #[error("Invalid artifact URL '{url}': {reason}")]
    InvalidArtifactUrl { url: String, reason: String },

    /// HTTP client could not be constructed.
    #[error("Failed to create HTTP client: {0}")]
    HttpClient(String),

    /// A single artifact transfer failed.
    #[error("Download of '{url}' failed: {details}")]
    Download { url: String, details: String },

    /// The embed archive could not be read or unpacked.
    #[error("Archive error in '{path}': {details}")]
    Archive { path: String, details: String },

    /// No `python<digits>._pth` file after extraction.
    #[error("No python<version>._pth file found in {dir}")]
    PathConfigNotFound { dir: String },

    /// More than one `python<digits>._pth` file after extraction.
    #[error("Multiple ._pth files found in {dir}: {candidates}")]
    AmbiguousPathConfig { dir: String, candidates: String },

    /// External tool failed to start or exited unsuccessfully.
    #[error("External tool '{tool}' failed: {error}")]
    ExternalToolError { tool: String, error: String },

    /// One or more artifacts in a fetch batch failed.
    #[error("{failed} of {total} artifact(s) failed to download")]
    FetchIncomplete { failed: usize, total: usize },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
