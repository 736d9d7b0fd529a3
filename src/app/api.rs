//! Library entry points for embedding the pipeline in another build step.

use std::path::{Path, PathBuf};

use crate::adapters::{HttpArtifactFetcher, LocalFilesystem, ProcessToolRunner, ZipArchiveExtractor};
use crate::app::AppContext;
use crate::app::commands::{fetch, stage};
use crate::domain::{AppError, DirectoryLayout, FetchReport};

pub use crate::app::commands::package::PackagedArchive;
pub use crate::app::commands::stage::{StageOutcome, StagedEnvironment};

fn load_context(
    root: &Path,
    config_path: Option<&Path>,
) -> Result<AppContext<LocalFilesystem>, AppError> {
    let root: PathBuf = std::path::absolute(root)?;
    AppContext::load(&root, config_path, LocalFilesystem::new(root.clone()))
}

/// Resolve the directory layout for a repository root without touching it.
pub fn resolve_layout(
    root: &Path,
    config_path: Option<&Path>,
) -> Result<DirectoryLayout, AppError> {
    Ok(load_context(root, config_path)?.layout().clone())
}

/// Download every configured artifact that is not cached yet.
///
/// Individual download failures are reported in the returned `FetchReport`
/// rather than as an error.
pub fn fetch_at(root: &Path, config_path: Option<&Path>) -> Result<FetchReport, AppError> {
    let ctx = load_context(root, config_path)?;
    let fetcher = HttpArtifactFetcher::new(&ctx.config().fetch)?;
    fetch::execute(&ctx, &fetcher)
}

/// Rebuild the staging directory from the cached embed archive and package it.
pub fn stage_at(root: &Path, config_path: Option<&Path>) -> Result<StageOutcome, AppError> {
    let ctx = load_context(root, config_path)?;
    stage::execute(&ctx, &ZipArchiveExtractor::new(), &ProcessToolRunner::new())
}
