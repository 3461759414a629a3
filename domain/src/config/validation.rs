//! Configuration issues reported by config validation.
//!
//! Validation never fails outright; it returns every detected issue with a
//! severity so the caller can print warnings and abort only on errors.
//!
//! # Examples
//!
//! ```
//! use jury_domain::config::{ConfigIssue, ConfigIssueCode, Severity};
//!
//! let issue = ConfigIssue::warning(
//!     ConfigIssueCode::EvenPanelSize { value: 4 },
//!     "moderation.panel_size: 4 is even, using 3",
//! );
//! assert!(!ConfigIssue::has_errors(&[issue]));
//! ```

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// Panel size of zero; the default is used instead.
    ZeroPanelSize,
    /// Even panel size; rounded down to the next odd number.
    EvenPanelSize { value: usize },
    /// Report threshold of zero would empanel content nobody reported.
    ZeroReportThreshold,
    /// No commit attempt would ever be made.
    ZeroCommitAttempts,
    /// A path setting is present but empty.
    EmptyPath { field: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    /// Check whether any issues are errors (i.e. fatal).
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}
