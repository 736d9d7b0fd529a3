pub mod loader;
pub mod stage_config;

pub use loader::{CONFIG_FILE, load_config, parse_config_content};
pub use stage_config::{FetchConfig, LayoutConfig, StageConfig};
