//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types.

mod logging;
mod moderation;
mod storage;

pub use logging::FileLoggingConfig;
pub use moderation::FileModerationConfig;
pub use storage::{DEFAULT_DATA_FILE, FileStorageConfig};

use jury_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Panel and retry settings
    pub moderation: FileModerationConfig,
    /// Data file location
    pub storage: FileStorageConfig,
    /// Audit and diagnostic log locations
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.moderation.validate();

        let paths = [
            ("storage.path", self.storage.path.as_deref()),
            ("logging.audit_log", self.logging.audit_log.as_deref()),
            ("logging.dir", self.logging.dir.as_deref()),
        ];
        for (field, path) in paths {
            if path.is_some_and(|p: &Path| p.as_os_str().is_empty()) {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyPath {
                        field: field.to_string(),
                    },
                    format!("{}: path is empty", field),
                ));
            }
        }

        issues
    }
}
