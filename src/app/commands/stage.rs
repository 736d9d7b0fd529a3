//! Stage phase: rebuild the staging directory from the embed archive and package it.

use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::domain::{
    AppError, DirectoryLayout, InterpreterVersion, PathConfigFile, render_path_config,
};
use crate::ports::{ArchiveExtractor, BuildFilesystem, ToolRunner};

use super::package::{EnvironmentPackager, PackagedArchive};

/// Result of a successful staging run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedEnvironment {
    pub root: PathBuf,
    pub entries: usize,
    pub path_config: PathConfigFile,
}

/// Result of the whole stage phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageOutcome {
    pub environment: StagedEnvironment,
    pub archive: PackagedArchive,
}

/// Turns the cached embed archive into a ready-to-package directory tree.
///
/// Steps run strictly in order: reset, extract, locate, rewrite. Any failure
/// stops the run; there is no partially staged result.
pub struct EnvironmentStager<'a, F: BuildFilesystem, X: ArchiveExtractor> {
    layout: &'a DirectoryLayout,
    filesystem: &'a F,
    extractor: &'a X,
}

impl<'a, F: BuildFilesystem, X: ArchiveExtractor> EnvironmentStager<'a, F, X> {
    pub fn new(layout: &'a DirectoryLayout, filesystem: &'a F, extractor: &'a X) -> Self {
        Self { layout, filesystem, extractor }
    }

    /// Delete the staging directory if present and recreate it empty.
    pub fn reset_staging_directory(&self) -> Result<(), AppError> {
        let env_dir = &self.layout.env_dir;
        if self.filesystem.exists(env_dir) {
            tracing::debug!(path = %env_dir.display(), "removing previous staging directory");
            self.filesystem.remove_dir_all(env_dir)?;
        }
        self.filesystem.create_dir_all(env_dir)
    }

    /// Unpack the archive into the staging directory.
    pub fn extract_artifact(&self, zip_path: &Path) -> Result<usize, AppError> {
        if !self.filesystem.is_file(zip_path) {
            return Err(AppError::Archive {
                path: zip_path.display().to_string(),
                details: "archive not found; run `envstage fetch` first".to_string(),
            });
        }
        self.extractor.extract(zip_path, &self.layout.env_dir)
    }

    /// Find the single top-level `python<digits>._pth` file.
    pub fn locate_path_config(&self) -> Result<PathConfigFile, AppError> {
        let env_dir = &self.layout.env_dir;
        let mut matches: Vec<PathConfigFile> = self
            .filesystem
            .list_dir(env_dir)?
            .into_iter()
            .filter(|path| self.filesystem.is_file(path))
            .filter_map(|path| {
                let version = path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .and_then(InterpreterVersion::from_file_name)?;
                Some(PathConfigFile { path, version })
            })
            .collect();

        match matches.len() {
            0 => Err(AppError::PathConfigNotFound { dir: env_dir.display().to_string() }),
            1 => Ok(matches.remove(0)),
            _ => Err(AppError::AmbiguousPathConfig {
                dir: env_dir.display().to_string(),
                candidates: matches
                    .iter()
                    .map(|m| m.version.path_config_file_name())
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }

    /// Replace the file's content with the search path for the staged layout.
    pub fn rewrite_path_config(&self, path_config: &PathConfigFile) -> Result<(), AppError> {
        let content = render_path_config(&path_config.version);
        self.filesystem.write_file(&path_config.path, &content)?;
        tracing::debug!(
            path = %path_config.path.display(),
            version = %path_config.version,
            "path configuration rewritten"
        );
        Ok(())
    }

    /// Run reset, extract, locate and rewrite in sequence.
    pub fn stage(&self) -> Result<StagedEnvironment, AppError> {
        self.reset_staging_directory()?;
        let entries = self.extract_artifact(&self.layout.embed_archive)?;
        let path_config = self.locate_path_config()?;
        self.rewrite_path_config(&path_config)?;

        tracing::info!(entries, version = %path_config.version, "environment staged");
        Ok(StagedEnvironment { root: self.layout.env_dir.clone(), entries, path_config })
    }
}

/// Run the stage phase: stage the environment, then package it.
pub fn execute<F, X, R>(
    ctx: &AppContext<F>,
    extractor: &X,
    runner: &R,
) -> Result<StageOutcome, AppError>
where
    F: BuildFilesystem,
    X: ArchiveExtractor,
    R: ToolRunner,
{
    let environment = EnvironmentStager::new(ctx.layout(), ctx.filesystem(), extractor).stage()?;
    let archive = EnvironmentPackager::new(ctx.layout(), ctx.filesystem(), runner).package()?;
    Ok(StageOutcome { environment, archive })
}
