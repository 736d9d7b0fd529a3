//! Pipeline configuration domain models.

use std::collections::HashSet;
use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

use crate::domain::{AppError, RemoteArtifact};

/// Configuration loaded from `envstage.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StageConfig {
    /// Directory and file names under the repository root.
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Artifact acquisition settings.
    #[serde(default)]
    pub fetch: FetchConfig,
}

impl StageConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.layout.validate()?;
        self.fetch.validate()?;
        Ok(())
    }
}

/// Names that make up the directory layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    /// Build root, relative to the repository root.
    #[serde(default = "default_build_dir")]
    pub build_dir: String,
    /// Artifact cache, relative to the build root.
    #[serde(default = "default_resources_dir")]
    pub resources_dir: String,
    /// Staging directory, relative to the build root.
    #[serde(default = "default_env_dir")]
    pub env_dir: String,
    /// Packaged archive file name, relative to the build root.
    #[serde(default = "default_env_archive")]
    pub env_archive: String,
    /// File name of the embeddable runtime zip inside the resources directory.
    #[serde(default = "default_embed_archive")]
    pub embed_archive: String,
    /// Compressor executable: a program name on `PATH` or a path.
    #[serde(default = "default_compressor")]
    pub compressor: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            build_dir: default_build_dir(),
            resources_dir: default_resources_dir(),
            env_dir: default_env_dir(),
            env_archive: default_env_archive(),
            embed_archive: default_embed_archive(),
            compressor: default_compressor(),
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        for (field, value) in [
            ("build_dir", &self.build_dir),
            ("resources_dir", &self.resources_dir),
            ("env_dir", &self.env_dir),
            ("env_archive", &self.env_archive),
            ("embed_archive", &self.embed_archive),
        ] {
            validate_single_component(field, value)?;
        }
        if self.resources_dir == self.env_dir {
            return Err(AppError::config_error(
                "resources_dir and env_dir must differ: staging resets its directory",
            ));
        }
        if self.env_archive == self.env_dir || self.env_archive == self.resources_dir {
            return Err(AppError::config_error(format!(
                "env_archive '{}' must not name the staging or resources directory",
                self.env_archive
            )));
        }
        if self.compressor.trim().is_empty() {
            return Err(AppError::config_error("compressor must not be empty"));
        }
        Ok(())
    }
}

/// Artifact acquisition settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FetchConfig {
    /// Request timeout in seconds, covering the whole transfer.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Artifacts that must be present in the resources directory.
    #[serde(default = "default_artifacts")]
    pub artifacts: Vec<RemoteArtifact>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout_secs: default_timeout(), artifacts: default_artifacts() }
    }
}

impl FetchConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("timeout_secs must be greater than 0"));
        }
        let mut seen = HashSet::new();
        for artifact in &self.artifacts {
            if !seen.insert(artifact.file_name()) {
                return Err(AppError::config_error(format!(
                    "Duplicate artifact file name '{}' (from {})",
                    artifact.file_name(),
                    artifact
                )));
            }
        }
        let partials: HashSet<String> =
            self.artifacts.iter().map(RemoteArtifact::partial_file_name).collect();
        if let Some(artifact) =
            self.artifacts.iter().find(|artifact| partials.contains(artifact.file_name()))
        {
            return Err(AppError::config_error(format!(
                "Artifact file name '{}' (from {}) is reserved for an in-progress download",
                artifact.file_name(),
                artifact
            )));
        }
        Ok(())
    }
}

fn validate_single_component(field: &str, value: &str) -> Result<(), AppError> {
    let mut components = Path::new(value).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) if !value.contains(['/', '\\']) => Ok(()),
        _ => Err(AppError::config_error(format!(
            "{field} must be a single relative path component, got '{value}'"
        ))),
    }
}

fn default_build_dir() -> String {
    "build".to_string()
}

fn default_resources_dir() -> String {
    "resources".to_string()
}

fn default_env_dir() -> String {
    "env".to_string()
}

fn default_env_archive() -> String {
    "env.7z".to_string()
}

fn default_embed_archive() -> String {
    "python-3.12.8-embed-amd64.zip".to_string()
}

fn default_compressor() -> String {
    "7z".to_string()
}

fn default_timeout() -> u64 {
    300
}

fn default_artifacts() -> Vec<RemoteArtifact> {
    [
        "https://www.python.org/ftp/python/3.12.8/python-3.12.8-embed-amd64.zip",
        "https://bootstrap.pypa.io/get-pip.py",
    ]
    .into_iter()
    .map(|raw| RemoteArtifact::parse(raw).expect("Default artifact URL must be valid"))
    .collect()
}
