mod archive_extractor;
mod artifact_fetcher;
mod build_filesystem;
mod tool_runner;

pub use archive_extractor::ArchiveExtractor;
pub use artifact_fetcher::ArtifactFetcher;
pub use build_filesystem::BuildFilesystem;
pub use tool_runner::{ToolInvocation, ToolRunner};
