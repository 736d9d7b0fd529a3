use std::path::Path;

use crate::domain::configuration::load_config;
use crate::domain::{AppError, DirectoryLayout, StageConfig};
use crate::ports::BuildFilesystem;

/// Application context holding the resolved configuration for one run.
pub struct AppContext<F: BuildFilesystem> {
    config: StageConfig,
    layout: DirectoryLayout,
    filesystem: F,
}

impl<F: BuildFilesystem> AppContext<F> {
    /// Create a new application context.
    pub fn new(config: StageConfig, layout: DirectoryLayout, filesystem: F) -> Self {
        Self { config, layout, filesystem }
    }

    /// Load configuration for `root` and resolve its layout.
    pub fn load(root: &Path, config_path: Option<&Path>, filesystem: F) -> Result<Self, AppError> {
        let config = load_config(root, config_path, &filesystem)?;
        let layout = DirectoryLayout::resolve(root, &config.layout)?;
        Ok(Self::new(config, layout, filesystem))
    }

    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    pub fn layout(&self) -> &DirectoryLayout {
        &self.layout
    }

    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }
}
