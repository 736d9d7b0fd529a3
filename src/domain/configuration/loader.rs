//! Pipeline configuration loading.

use std::path::{Path, PathBuf};

use crate::domain::{AppError, StageConfig};
use crate::ports::BuildFilesystem;

/// Default configuration file name, looked up at the repository root.
pub const CONFIG_FILE: &str = "envstage.toml";

/// Load the configuration for a repository.
///
/// An explicit path must exist. Without one, `<root>/envstage.toml` is used when
/// present and the built-in defaults otherwise.
pub fn load_config<F: BuildFilesystem + ?Sized>(
    root: &Path,
    explicit: Option<&Path>,
    filesystem: &F,
) -> Result<StageConfig, AppError> {
    let path = match explicit {
        Some(path) => {
            let path = if path.is_absolute() { path.to_path_buf() } else { root.join(path) };
            if !filesystem.exists(&path) {
                return Err(AppError::ConfigFileMissing(path.display().to_string()));
            }
            path
        }
        None => {
            let path: PathBuf = root.join(CONFIG_FILE);
            if !filesystem.exists(&path) {
                tracing::debug!(path = %path.display(), "no config file; using defaults");
                return Ok(StageConfig::default());
            }
            path
        }
    };

    tracing::debug!(path = %path.display(), "loading config");
    let content = filesystem.read_file(&path)?;
    parse_config_content(&content)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<StageConfig, AppError> {
    let config: StageConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
