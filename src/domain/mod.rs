pub mod artifact;
pub mod configuration;
pub mod error;
pub mod layout;
pub mod path_config;

pub use artifact::{DownloadOutcome, DownloadStatus, FetchReport, RemoteArtifact};
pub use configuration::{FetchConfig, LayoutConfig, StageConfig};
pub use error::AppError;
pub use layout::DirectoryLayout;
pub use path_config::{InterpreterVersion, PathConfigFile, render_path_config};
