//! Content item entity
//!
//! A [`ContentItem`] carries both the user's post and the full state of its
//! moderation: the current panel, the votes of the running round and the
//! audit trail of past verdicts.
//!
//! The mutators on this type are the only place moderation fields change.
//! They never decide a status on their own; callers pass in what
//! [`resolve_outcome`](crate::moderation::resolve_outcome) produced.

use crate::moderation::{
    DEFAULT_PANEL_SIZE, ModerationEntry, ModerationStatus, Vote, VoteChoice,
};
use serde::{Deserialize, Serialize};

/// Identifier of a content item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContentId(String);

impl ContentId {
    /// Creates a ContentId from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<T: Into<String>> From<T> for ContentId {
    fn from(s: T) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A piece of user content and its moderation state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: ContentId,
    /// Author account (email)
    pub author: String,
    /// The post body
    pub content: String,
    #[serde(default)]
    pub status: ModerationStatus,
    /// Current panel, in draw order
    #[serde(default)]
    pub jurors: Vec<String>,
    /// Votes of the running round, at most one per juror
    #[serde(default)]
    pub votes: Vec<Vote>,
    #[serde(default)]
    pub moderation_history: Vec<ModerationEntry>,
    /// Categories tied in the most recent tie
    #[serde(default)]
    pub revote_options: Vec<VoteChoice>,
    /// True while a revote panel has not yet resolved
    #[serde(default)]
    pub revote_round: bool,
    /// Jurors of the round that produced the most recent tie
    #[serde(default)]
    pub previous_jurors: Vec<String>,
    #[serde(default)]
    pub report_count: u32,
    #[serde(default)]
    pub hidden: bool,
}

impl ContentItem {
    /// Create a fresh item with no panel and no history
    pub fn new(
        id: impl Into<ContentId>,
        author: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            author: author.into(),
            content: content.into(),
            status: ModerationStatus::UnderReview,
            jurors: Vec::new(),
            votes: Vec::new(),
            moderation_history: Vec::new(),
            revote_options: Vec::new(),
            revote_round: false,
            previous_jurors: Vec::new(),
            report_count: 0,
            hidden: false,
        }
    }

    /// Assign a panel at construction time
    pub fn with_jurors(mut self, jurors: Vec<String>) -> Self {
        self.jurors = jurors;
        self
    }

    // ==================== Queries ====================

    /// Number of votes that complete a round
    ///
    /// The recorded panel length, or [`DEFAULT_PANEL_SIZE`] when no panel is
    /// recorded.
    pub fn panel_size(&self) -> usize {
        if self.jurors.is_empty() {
            DEFAULT_PANEL_SIZE
        } else {
            self.jurors.len()
        }
    }

    /// Whether `juror` already voted in the running round
    pub fn has_voted(&self, juror: &str) -> bool {
        self.votes.iter().any(|v| v.juror == juror)
    }

    /// Whether `juror` sits on the current panel
    pub fn is_on_panel(&self, juror: &str) -> bool {
        self.jurors.iter().any(|j| j == juror)
    }

    /// Whether every seat has voted
    pub fn is_round_complete(&self) -> bool {
        self.votes.len() >= self.panel_size()
    }

    /// Jurors who voted in the running round, in voting order
    pub fn voters(&self) -> Vec<String> {
        self.votes.iter().map(|v| v.juror.clone()).collect()
    }

    /// An active item whose panel could not be filled
    pub fn is_stalled(&self) -> bool {
        self.status.is_active() && self.jurors.is_empty() && self.revote_round
    }

    /// Everyone with a stake in a removal: the panel plus the author
    pub fn stakeholders(&self) -> Vec<String> {
        let mut people = self.jurors.clone();
        if !people.contains(&self.author) {
            people.push(self.author.clone());
        }
        people
    }

    // ==================== Mutators ====================

    /// Append a vote to the running round
    ///
    /// Returns `false` (and changes nothing) if this juror already voted.
    pub fn record_vote(&mut self, vote: Vote) -> bool {
        if self.has_voted(&vote.juror) {
            return false;
        }
        self.votes.push(vote);
        true
    }

    /// Append a verdict to the audit trail
    ///
    /// Skipped when the latest entry already records the same decision on
    /// the same content. Returns whether an entry was appended.
    pub fn record_decision(&mut self, decision: ModerationStatus) -> bool {
        let entry = ModerationEntry::new(decision, self.content.clone());
        if self
            .moderation_history
            .last()
            .is_some_and(|last| last.same_decision_as(&entry))
        {
            return false;
        }
        self.moderation_history.push(entry);
        true
    }

    /// Restart voting with a fresh panel after a tie
    ///
    /// The voters of the tied round are kept in `previous_jurors`. An empty
    /// `panel` leaves the item stalled in `revote` until a panel is assigned.
    pub fn begin_revote(&mut self, panel: Vec<String>, options: Vec<VoteChoice>) {
        self.previous_jurors = self.voters();
        self.votes.clear();
        self.jurors = panel;
        self.revote_options = options;
        self.status = ModerationStatus::Revote;
        self.revote_round = true;
    }

    /// Reset flags after an `appropriate` verdict
    pub fn clear_after_approval(&mut self) {
        self.status = ModerationStatus::Appropriate;
        self.report_count = 0;
        self.jurors.clear();
        self.votes.clear();
        self.revote_options.clear();
        self.revote_round = false;
    }

    /// Hide the item after a `revision` verdict
    ///
    /// Panel and votes stay on the item as part of its audit record.
    pub fn hide_for_revision(&mut self) {
        self.status = ModerationStatus::Revision;
        self.hidden = true;
        self.revote_options.clear();
        self.revote_round = false;
    }

    /// Seat a new panel and reopen voting
    pub fn assign_panel(&mut self, panel: Vec<String>, status: ModerationStatus) {
        self.jurors = panel;
        self.votes.clear();
        self.status = status;
    }
}
