//! Resolved directory layout shared by every pipeline phase.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{AppError, LayoutConfig, RemoteArtifact};

/// Absolute locations used by one pipeline run.
///
/// Resolved once from the repository root and passed by reference to each
/// component. Nothing mutates it after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryLayout {
    pub repo_root: PathBuf,
    pub build_root: PathBuf,
    pub resources_dir: PathBuf,
    pub env_dir: PathBuf,
    pub embed_archive: PathBuf,
    pub env_archive: PathBuf,
    pub compressor: PathBuf,
}

impl DirectoryLayout {
    pub fn resolve(repo_root: &Path, config: &LayoutConfig) -> Result<Self, AppError> {
        if !repo_root.is_absolute() {
            return Err(AppError::config_error(format!(
                "Repository root must be absolute: {}",
                repo_root.display()
            )));
        }
        config.validate()?;

        let build_root = repo_root.join(&config.build_dir);
        let resources_dir = build_root.join(&config.resources_dir);

        Ok(Self {
            repo_root: repo_root.to_path_buf(),
            env_dir: build_root.join(&config.env_dir),
            embed_archive: resources_dir.join(&config.embed_archive),
            env_archive: build_root.join(&config.env_archive),
            compressor: resolve_compressor(repo_root, &config.compressor),
            resources_dir,
            build_root,
        })
    }

    /// Cache location for an artifact.
    pub fn resource_path(&self, artifact: &RemoteArtifact) -> PathBuf {
        self.resources_dir.join(artifact.file_name())
    }

    /// Download target used until the transfer completes.
    pub fn partial_path(&self, artifact: &RemoteArtifact) -> PathBuf {
        self.resources_dir.join(artifact.partial_file_name())
    }
}

/// Bare program names stay as-is for `PATH` lookup; anything with a separator is a path.
fn resolve_compressor(repo_root: &Path, compressor: &str) -> PathBuf {
    let path = Path::new(compressor);
    if path.is_absolute() || !compressor.contains(['/', '\\']) {
        path.to_path_buf()
    } else {
        repo_root.join(path)
    }
}
