//! Fetch phase: make sure every configured artifact is in the resources cache.

use std::io::Write;
use std::path::Path;

use crate::app::AppContext;
use crate::domain::{
    AppError, DirectoryLayout, DownloadOutcome, DownloadStatus, FetchReport, RemoteArtifact,
};
use crate::ports::{ArtifactFetcher, BuildFilesystem};

/// Local cache of remote artifacts under the resources directory.
///
/// A file already present at an artifact's destination is a cache hit and is
/// never fetched again. Transfers land in a hidden `.<name>.envstage-part`
/// sibling first so a failed download cannot leave something that looks like a hit.
pub struct ResourceCache<'a, F: BuildFilesystem, H: ArtifactFetcher> {
    layout: &'a DirectoryLayout,
    filesystem: &'a F,
    fetcher: &'a H,
}

impl<'a, F: BuildFilesystem, H: ArtifactFetcher> ResourceCache<'a, F, H> {
    pub fn new(layout: &'a DirectoryLayout, filesystem: &'a F, fetcher: &'a H) -> Self {
        Self { layout, filesystem, fetcher }
    }

    /// Create the build root and resources directory. Safe to call repeatedly.
    pub fn ensure_directories(&self) -> Result<(), AppError> {
        self.filesystem.create_dir_all(&self.layout.build_root)?;
        self.filesystem.create_dir_all(&self.layout.resources_dir)?;
        Ok(())
    }

    /// Ensure one artifact exists locally.
    pub fn acquire(&self, artifact: &RemoteArtifact) -> DownloadOutcome {
        let destination = self.layout.resource_path(artifact);

        let status = if self.filesystem.exists(&destination) {
            tracing::debug!(file = artifact.file_name(), "cache hit");
            DownloadStatus::Cached
        } else {
            match self.download(artifact, &destination, &self.layout.partial_path(artifact)) {
                Ok(bytes) => {
                    tracing::info!(file = artifact.file_name(), bytes, "downloaded");
                    DownloadStatus::Downloaded { bytes }
                }
                Err(err) => {
                    tracing::warn!(url = %artifact, error = %err, "download failed");
                    DownloadStatus::Failed { error: err.to_string() }
                }
            }
        };

        DownloadOutcome { url: artifact.url().clone(), destination, status }
    }

    /// Acquire every artifact in order. Failures are recorded, not short-circuited.
    pub fn acquire_all(&self, artifacts: &[RemoteArtifact]) -> FetchReport {
        FetchReport { outcomes: artifacts.iter().map(|artifact| self.acquire(artifact)).collect() }
    }

    fn download(
        &self,
        artifact: &RemoteArtifact,
        destination: &Path,
        partial: &Path,
    ) -> Result<u64, AppError> {
        let result = self.stream_to(artifact, partial).and_then(|bytes| {
            self.filesystem.rename(partial, destination)?;
            Ok(bytes)
        });

        if result.is_err() {
            if let Err(cleanup) = self.filesystem.remove_file(partial) {
                tracing::warn!(
                    path = %partial.display(),
                    error = %cleanup,
                    "failed to remove partial download"
                );
            }
        }
        result
    }

    fn stream_to(&self, artifact: &RemoteArtifact, partial: &Path) -> Result<u64, AppError> {
        let mut writer = self.filesystem.create_file(partial)?;
        let bytes = self.fetcher.fetch(artifact.url(), &mut *writer)?;
        writer.flush()?;
        Ok(bytes)
    }
}

/// Run the fetch phase for the configured artifacts.
pub fn execute<F: BuildFilesystem, H: ArtifactFetcher>(
    ctx: &AppContext<F>,
    fetcher: &H,
) -> Result<FetchReport, AppError> {
    let cache = ResourceCache::new(ctx.layout(), ctx.filesystem(), fetcher);
    cache.ensure_directories()?;
    Ok(cache.acquire_all(&ctx.config().fetch.artifacts))
}
