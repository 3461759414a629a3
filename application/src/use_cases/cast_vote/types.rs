//! Input, output and error types for the CastVote use case.

use crate::ports::moderation_store::StoreError;
use jury_domain::{ContentId, ModerationStatus, VoteChoice};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while casting a vote.
///
/// Missing content and repeated votes are not errors; they come back as
/// [`VoteOutcome::ContentMissing`] and [`VoteOutcome::Duplicate`].
#[derive(Error, Debug)]
pub enum CastVoteError {
    /// Authors never sit in judgement of their own content.
    #[error("{juror} cannot vote on their own content {content_id}")]
    SelfVote { content_id: ContentId, juror: String },

    /// Only the current panel may vote.
    #[error("{juror} is not on the panel for {content_id}")]
    NotOnPanel { content_id: ContentId, juror: String },

    /// A vote the tally cannot count would hold a seat forever.
    #[error("{juror} cast an unrecognized choice on {content_id}")]
    UnknownChoice { content_id: ContentId, juror: String },

    /// During a revote only the tied categories are on the ballot.
    #[error("'{choice}' is not on the ballot for {content_id} (options: {})", format_options(.options))]
    ChoiceNotOffered {
        content_id: ContentId,
        choice: VoteChoice,
        options: Vec<VoteChoice>,
    },

    /// Every attempt lost the race against another writer.
    #[error("Vote on {content_id} not recorded after {attempts} conflicting attempts, try again")]
    Conflict { content_id: ContentId, attempts: u32 },

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

impl CastVoteError {
    /// Whether retrying the same vote later might succeed
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            CastVoteError::Conflict { .. } | CastVoteError::Store(StoreError::Io(_))
        )
    }
}

fn format_options(options: &[VoteChoice]) -> String {
    options
        .iter()
        .map(|o| o.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Input for casting a vote.
#[derive(Debug, Clone)]
pub struct CastVoteInput {
    pub content_id: ContentId,
    /// The voting juror, passed explicitly rather than read from a session
    pub juror: String,
    pub choice: VoteChoice,
}

impl CastVoteInput {
    pub fn new(
        content_id: impl Into<ContentId>,
        juror: impl Into<String>,
        choice: VoteChoice,
    ) -> Self {
        Self {
            content_id: content_id.into(),
            juror: juror.into(),
            choice,
        }
    }
}

/// What a vote did to its content item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum VoteOutcome {
    /// No such item; nothing was written
    ContentMissing,
    /// This juror already voted in the running round; nothing was written
    Duplicate,
    /// Vote counted, round still open
    #[serde(rename_all = "camelCase")]
    Recorded {
        status: ModerationStatus,
        votes: usize,
        panel_size: usize,
    },
    /// The round tied and a fresh panel was seated
    RevoteStarted {
        options: Vec<VoteChoice>,
        panel: Vec<String>,
    },
    /// The round tied but nobody was left to seat
    RevoteStalled { options: Vec<VoteChoice> },
    /// The round resolved and the item stays
    Resolved {
        status: ModerationStatus,
        strike: bool,
    },
    /// The round resolved `inappropriate` and the item was deleted
    Removed { notified: Vec<String> },
}

impl VoteOutcome {
    /// True when the vote changed nothing
    pub fn is_noop(&self) -> bool {
        matches!(self, VoteOutcome::ContentMissing | VoteOutcome::Duplicate)
    }

    /// Status of the item after the vote, if it still exists
    pub fn status(&self) -> Option<ModerationStatus> {
        match self {
            VoteOutcome::Recorded { status, .. } | VoteOutcome::Resolved { status, .. } => {
                Some(*status)
            }
            VoteOutcome::RevoteStarted { .. } | VoteOutcome::RevoteStalled { .. } => {
                Some(ModerationStatus::Revote)
            }
            VoteOutcome::Removed { .. } => Some(ModerationStatus::Deleted),
            VoteOutcome::ContentMissing | VoteOutcome::Duplicate => None,
        }
    }
}
