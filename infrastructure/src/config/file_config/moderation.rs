//! Moderation configuration from TOML (`[moderation]` section)
//!
//! Example configuration:
//!
//! ```toml
//! [moderation]
//! panel_size = 5
//! report_threshold = 1
//! max_commit_attempts = 3
//! enforce_panel_membership = true
//! ```

use jury_application::ModerationConfig;
use jury_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Raw moderation configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModerationConfig {
    /// Seats per panel; even values round down, zero means the default
    pub panel_size: usize,
    /// Reports before a panel is seated
    pub report_threshold: u32,
    /// Optimistic commit attempts per operation
    pub max_commit_attempts: u32,
    /// Only empaneled jurors may vote
    pub enforce_panel_membership: bool,
}

impl Default for FileModerationConfig {
    fn default() -> Self {
        let defaults = ModerationConfig::default();
        Self {
            panel_size: defaults.panel_size,
            report_threshold: defaults.report_threshold,
            max_commit_attempts: defaults.max_commit_attempts,
            enforce_panel_membership: defaults.enforce_panel_membership,
        }
    }
}

impl FileModerationConfig {
    /// Convert to the application config, normalizing out-of-range values
    pub fn to_moderation_config(&self) -> ModerationConfig {
        ModerationConfig::default()
            .with_panel_size(self.panel_size)
            .with_report_threshold(self.report_threshold)
            .with_max_commit_attempts(self.max_commit_attempts)
            .with_panel_membership(self.enforce_panel_membership)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.panel_size == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ZeroPanelSize,
                "moderation.panel_size: 0 is not a panel, using the default of 5",
            ));
        } else if self.panel_size % 2 == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::EvenPanelSize {
                    value: self.panel_size,
                },
                format!(
                    "moderation.panel_size: {} is even and could tie, using {}",
                    self.panel_size,
                    self.panel_size - 1
                ),
            ));
        }

        if self.report_threshold == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ZeroReportThreshold,
                "moderation.report_threshold: 0 is treated as 1",
            ));
        }

        if self.max_commit_attempts == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroCommitAttempts,
                "moderation.max_commit_attempts: must be at least 1",
            ));
        }

        issues
    }
}
