//! Configuration file loading for crowd-jury
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `JURY_`-prefixed environment variables (`JURY_MODERATION__PANEL_SIZE=7`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./jury.toml` or `./.jury.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/crowd-jury/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    DEFAULT_DATA_FILE, FileConfig, FileLoggingConfig, FileModerationConfig, FileStorageConfig,
};
pub use loader::ConfigLoader;
