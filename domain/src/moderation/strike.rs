//! Strike policy

use super::history::ModerationEntry;
use super::outcome::ModerationStatus;

/// Decide whether a resolved round earns the author a strike
///
/// `prior_history` is the audit trail as it was *before* the current round
/// was recorded.
///
/// - `inappropriate` always strikes.
/// - `revision` strikes only when the item has been through moderation
///   before and at least one earlier verdict was `appropriate` or
///   `revision`: a first request to revise is a warning, not a penalty.
/// - anything else never strikes.
pub fn warrants_strike(decision: ModerationStatus, prior_history: &[ModerationEntry]) -> bool {
    match decision {
        ModerationStatus::Inappropriate => true,
        ModerationStatus::Revision => prior_history.iter().any(|entry| {
            matches!(
                entry.decision,
                ModerationStatus::Appropriate | ModerationStatus::Revision
            )
        }),
        _ => false,
    }
}
