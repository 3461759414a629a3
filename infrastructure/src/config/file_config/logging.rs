//! Logging configuration from TOML (`[logging]` section)
//!
//! ```toml
//! [logging]
//! audit_log = "~/.local/share/crowd-jury/audit.jsonl"
//! dir = "~/.local/state/crowd-jury/logs"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL moderation audit log; disabled when unset
    pub audit_log: Option<PathBuf>,
    /// Directory for daily rolling diagnostic logs; stderr only when unset
    pub dir: Option<PathBuf>,
}
