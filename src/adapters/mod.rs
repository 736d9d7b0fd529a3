pub mod archive;
pub mod filesystem;
pub mod http;
pub mod process;

pub use archive::ZipArchiveExtractor;
pub use filesystem::LocalFilesystem;
pub use http::HttpArtifactFetcher;
pub use process::ProcessToolRunner;
