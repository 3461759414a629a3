//! Moderation parameters: use case behavior control.
//!
//! [`ModerationConfig`] groups the static parameters the moderation use
//! cases share. These are application-layer concerns, not domain policy:
//! the tie and strike rules themselves live in `jury_domain`.

use jury_domain::{DEFAULT_PANEL_SIZE, odd_panel_size};
use serde::{Deserialize, Serialize};

/// Moderation use case parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModerationConfig {
    /// Seats requested for each new panel (drawn panels are always odd).
    pub panel_size: usize,
    /// Reports needed before a panel is seated on an item.
    pub report_threshold: u32,
    /// Optimistic commit attempts before a write conflict is surfaced.
    pub max_commit_attempts: u32,
    /// Only accept votes from jurors on the current panel.
    pub enforce_panel_membership: bool,
}

impl Default for ModerationConfig {
    fn default() -> Self {
        Self {
            panel_size: DEFAULT_PANEL_SIZE,
            report_threshold: 1,
            max_commit_attempts: 3,
            enforce_panel_membership: true,
        }
    }
}

impl ModerationConfig {
    // ==================== Builder Methods ====================

    /// Set the requested panel size.
    ///
    /// Zero falls back to the default and even sizes round down, so the
    /// stored value is always a valid odd seat count.
    pub fn with_panel_size(mut self, size: usize) -> Self {
        self.panel_size = match size {
            0 => DEFAULT_PANEL_SIZE,
            n => odd_panel_size(n, n),
        };
        self
    }

    pub fn with_report_threshold(mut self, threshold: u32) -> Self {
        self.report_threshold = threshold.max(1);
        self
    }

    pub fn with_max_commit_attempts(mut self, attempts: u32) -> Self {
        self.max_commit_attempts = attempts.max(1);
        self
    }

    pub fn with_panel_membership(mut self, enforce: bool) -> Self {
        self.enforce_panel_membership = enforce;
        self
    }
}
