//! Storage configuration from TOML (`[storage]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name of the data file when no path is configured
pub const DEFAULT_DATA_FILE: &str = "crowd-jury.json";

/// Raw storage configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// JSON data file; defaults to `$XDG_DATA_HOME/crowd-jury/crowd-jury.json`
    pub path: Option<PathBuf>,
}

impl FileStorageConfig {
    /// The data file to open
    pub fn resolve_path(&self) -> PathBuf {
        match &self.path {
            Some(path) => path.clone(),
            None => dirs::data_dir()
                .map(|d| d.join("crowd-jury").join(DEFAULT_DATA_FILE))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE)),
        }
    }
}
