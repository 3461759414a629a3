//! Moderation audit trail entries

use super::outcome::ModerationStatus;
use crate::core::time::current_timestamp;
use serde::{Deserialize, Serialize};

/// One resolved decision in a content item's audit trail
///
/// `content` is a snapshot of the payload at decision time, so a later
/// revision by the author is distinguishable from a repeated verdict on the
/// same text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModerationEntry {
    /// The verdict reached
    pub decision: ModerationStatus,
    /// Content as it was when the verdict was reached
    pub content: String,
    /// When the verdict was reached (milliseconds since epoch)
    pub timestamp: u64,
}

impl ModerationEntry {
    /// Create an entry stamped with the current time
    pub fn new(decision: ModerationStatus, content: impl Into<String>) -> Self {
        Self {
            decision,
            content: content.into(),
            timestamp: current_timestamp(),
        }
    }

    /// Whether `other` records the same verdict on the same content
    pub fn same_decision_as(&self, other: &ModerationEntry) -> bool {
        self.decision == other.decision && self.content == other.content
    }
}
