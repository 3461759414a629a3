//! Infrastructure layer for crowd-jury
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileLoggingConfig, FileModerationConfig, FileStorageConfig,
};
pub use logging::JsonlModerationLogger;
pub use storage::{InMemoryModerationStore, JsonFileModerationStore, StoreSnapshot};
