//! Round outcome resolution
//!
//! This module maps the votes of a round onto a [`ModerationStatus`].

use super::tally::VoteTally;
use super::vote::{Vote, VoteChoice};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Panel size used when an item has no panel recorded
pub const DEFAULT_PANEL_SIZE: usize = 5;

/// Moderation state of a content item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModerationStatus {
    /// Votes are still being collected
    #[default]
    UnderReview,
    /// The last round tied; a fresh panel is voting
    Revote,
    /// Resolved: content stays, flags cleared
    Appropriate,
    /// Resolved: content hidden until revised
    Revision,
    /// Resolved: content is being removed
    Inappropriate,
    /// Removed; the item no longer exists
    Deleted,
}

impl ModerationStatus {
    /// Whether this is one of the three verdicts a round can resolve to
    pub fn is_resolved(&self) -> bool {
        matches!(
            self,
            ModerationStatus::Appropriate
                | ModerationStatus::Revision
                | ModerationStatus::Inappropriate
        )
    }

    /// Whether a panel is expected to be voting
    pub fn is_active(&self) -> bool {
        matches!(self, ModerationStatus::UnderReview | ModerationStatus::Revote)
    }

    /// Stable camelCase name, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            ModerationStatus::UnderReview => "underReview",
            ModerationStatus::Revote => "revote",
            ModerationStatus::Appropriate => "appropriate",
            ModerationStatus::Revision => "revision",
            ModerationStatus::Inappropriate => "inappropriate",
            ModerationStatus::Deleted => "deleted",
        }
    }
}

impl From<VoteChoice> for ModerationStatus {
    /// The verdict a round resolves to when `choice` holds the unique maximum
    fn from(choice: VoteChoice) -> Self {
        match choice {
            VoteChoice::Appropriate => ModerationStatus::Appropriate,
            VoteChoice::Revision => ModerationStatus::Revision,
            VoteChoice::Inappropriate => ModerationStatus::Inappropriate,
            VoteChoice::Unrecognized => ModerationStatus::UnderReview,
        }
    }
}

impl std::fmt::Display for ModerationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ModerationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "underReview" | "under_review" => Ok(ModerationStatus::UnderReview),
            "revote" => Ok(ModerationStatus::Revote),
            "appropriate" => Ok(ModerationStatus::Appropriate),
            "revision" => Ok(ModerationStatus::Revision),
            "inappropriate" => Ok(ModerationStatus::Inappropriate),
            "deleted" => Ok(ModerationStatus::Deleted),
            other => Err(DomainError::UnknownStatus(other.to_string())),
        }
    }
}

/// Resolve the status of a round from its votes
///
/// - fewer counted votes than `panel_size` → [`ModerationStatus::UnderReview`]
/// - complete round, maximum shared by two or more categories → [`ModerationStatus::Revote`]
/// - complete round, unique maximum → that category
///
/// A complete round with no counted votes at all (only possible with a zero
/// panel) stays under review: it carries no evidence either way.
///
/// `panel_size` of `None` or `Some(0)` falls back to [`DEFAULT_PANEL_SIZE`].
///
/// # Example
///
/// ```
/// use jury_domain::moderation::{ModerationStatus, Vote, VoteChoice, resolve_outcome};
///
/// let votes: Vec<Vote> = ["a", "b", "c"]
///     .iter()
///     .map(|j| Vote::at(*j, VoteChoice::Appropriate, 0))
///     .collect();
/// assert_eq!(resolve_outcome(&votes, Some(5)), ModerationStatus::UnderReview);
/// assert_eq!(resolve_outcome(&votes, Some(3)), ModerationStatus::Appropriate);
/// ```
pub fn resolve_outcome(votes: &[Vote], panel_size: Option<usize>) -> ModerationStatus {
    let panel_size = match panel_size {
        Some(0) | None => DEFAULT_PANEL_SIZE,
        Some(n) => n,
    };
    let tally = VoteTally::from_votes(votes);

    if tally.total() < panel_size || tally.total() == 0 {
        return ModerationStatus::UnderReview;
    }

    match tally.leaders().as_slice() {
        [winner] => ModerationStatus::from(*winner),
        _ => ModerationStatus::Revote,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use VoteChoice::*;

    fn votes(choices: &[VoteChoice]) -> Vec<Vote> {
        choices
            .iter()
            .enumerate()
            .map(|(i, c)| Vote::at(format!("juror-{}", i), *c, 0))
            .collect()
    }

    #[test]
    fn test_incomplete_rounds_stay_under_review() {
        let all = [Inappropriate, Inappropriate, Inappropriate, Inappropriate];
        for len in 0..=all.len() {
            assert_eq!(
                resolve_outcome(&votes(&all[..len]), Some(5)),
                ModerationStatus::UnderReview,
                "{} of 5 votes",
                len
            );
        }
    }

    #[test]
    fn test_unique_maximum_wins() {
        assert_eq!(
            resolve_outcome(
                &votes(&[Appropriate, Appropriate, Appropriate, Revision, Revision]),
                Some(5)
            ),
            ModerationStatus::Appropriate
        );
        assert_eq!(
            resolve_outcome(
                &votes(&[Revision, Revision, Revision, Appropriate, Inappropriate]),
                Some(5)
            ),
            ModerationStatus::Revision
        );
        assert_eq!(
            resolve_outcome(
                &votes(&[Inappropriate, Inappropriate, Appropriate]),
                Some(3)
            ),
            ModerationStatus::Inappropriate
        );
    }

    #[test]
    fn test_two_way_tie_triggers_revote() {
        assert_eq!(
            resolve_outcome(
                &votes(&[Inappropriate, Inappropriate, Revision, Revision, Appropriate]),
                Some(5)
            ),
            ModerationStatus::Revote
        );
    }

    #[test]
    fn test_three_way_tie_triggers_revote() {
        assert_eq!(
            resolve_outcome(&votes(&[Inappropriate, Revision, Appropriate]), Some(3)),
            ModerationStatus::Revote
        );
    }

    #[test]
    fn test_default_panel_size() {
        let four = votes(&[Appropriate, Appropriate, Appropriate, Appropriate]);
        assert_eq!(resolve_outcome(&four, None), ModerationStatus::UnderReview);
        assert_eq!(resolve_outcome(&four, Some(0)), ModerationStatus::UnderReview);

        let five = votes(&[Appropriate; 5]);
        assert_eq!(resolve_outcome(&five, None), ModerationStatus::Appropriate);
    }

    #[test]
    fn test_unrecognized_votes_do_not_complete_a_round() {
        let mixed = votes(&[Unrecognized, Unrecognized, Appropriate, Appropriate, Revision]);
        assert_eq!(resolve_outcome(&mixed, Some(5)), ModerationStatus::UnderReview);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let round = votes(&[Revision, Appropriate, Revision, Inappropriate, Revision]);
        let first = resolve_outcome(&round, Some(5));
        for _ in 0..10 {
            assert_eq!(resolve_outcome(&round, Some(5)), first);
        }
    }

    #[test]
    fn test_status_predicates() {
        assert!(ModerationStatus::Appropriate.is_resolved());
        assert!(ModerationStatus::Inappropriate.is_resolved());
        assert!(!ModerationStatus::Revote.is_resolved());
        assert!(!ModerationStatus::Deleted.is_resolved());
        assert!(ModerationStatus::UnderReview.is_active());
        assert!(ModerationStatus::Revote.is_active());
        assert!(!ModerationStatus::Revision.is_active());
    }

    #[test]
    fn test_status_serde_names() {
        assert_eq!(
            serde_json::to_string(&ModerationStatus::UnderReview).unwrap(),
            "\"underReview\""
        );
        assert_eq!(
            "underReview".parse::<ModerationStatus>().ok(),
            Some(ModerationStatus::UnderReview)
        );
        assert!("pending".parse::<ModerationStatus>().is_err());
    }
}
