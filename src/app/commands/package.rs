//! Packaging of the staging directory into a single archive.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, DirectoryLayout};
use crate::ports::{BuildFilesystem, ToolInvocation, ToolRunner};

/// The archive produced by a packaging run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagedArchive {
    pub path: PathBuf,
    /// Whether an archive from an earlier run was deleted first.
    pub replaced_stale: bool,
}

/// Thin wrapper around the external compressor.
pub struct EnvironmentPackager<'a, F: BuildFilesystem, R: ToolRunner> {
    layout: &'a DirectoryLayout,
    filesystem: &'a F,
    runner: &'a R,
}

impl<'a, F: BuildFilesystem, R: ToolRunner> EnvironmentPackager<'a, F, R> {
    pub fn new(layout: &'a DirectoryLayout, filesystem: &'a F, runner: &'a R) -> Self {
        Self { layout, filesystem, runner }
    }

    /// Delete a previous archive so the compressor never appends to it.
    pub fn remove_stale_archive(&self, path: &Path) -> Result<bool, AppError> {
        if !self.filesystem.exists(path) {
            return Ok(false);
        }
        tracing::debug!(path = %path.display(), "removing stale archive");
        self.filesystem.remove_file(path)?;
        Ok(true)
    }

    /// Add every entry under `source_dir` to `target` with `<compressor> a`.
    pub fn compress(&self, source_dir: &Path, target: &Path) -> Result<(), AppError> {
        let invocation = ToolInvocation {
            program: self.layout.compressor.clone(),
            args: vec![
                OsString::from("a"),
                target.as_os_str().to_os_string(),
                source_dir.join("*").into_os_string(),
            ],
            working_dir: self.layout.build_root.clone(),
        };
        self.runner.run(&invocation)?;

        if !self.filesystem.is_file(target) {
            return Err(AppError::ExternalToolError {
                tool: self.layout.compressor.display().to_string(),
                error: format!("exited successfully but did not produce {}", target.display()),
            });
        }
        Ok(())
    }

    /// Replace the archive at the layout's target path with the staging directory contents.
    pub fn package(&self) -> Result<PackagedArchive, AppError> {
        let target = &self.layout.env_archive;
        let replaced_stale = self.remove_stale_archive(target)?;
        self.compress(&self.layout.env_dir, target)?;

        tracing::info!(archive = %target.display(), "environment packaged");
        Ok(PackagedArchive { path: target.clone(), replaced_stale })
    }
}
