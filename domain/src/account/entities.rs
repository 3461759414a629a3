//! Account entity and the updates moderation applies to it.

use crate::content::ContentId;
use crate::core::time::current_timestamp;
use serde::{Deserialize, Serialize};

/// Strike count at which an account is locked
pub const STRIKE_LOCK_THRESHOLD: u32 = 3;

/// A notification record addressed to an account
///
/// Only the record is created here; delivery is someone else's job.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub message: String,
    /// Milliseconds since epoch
    pub timestamp: u64,
    /// The content item this notification is about
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_content_id: Option<ContentId>,
}

impl Notification {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timestamp: current_timestamp(),
            related_content_id: None,
        }
    }

    pub fn about(mut self, content_id: ContentId) -> Self {
        self.related_content_id = Some(content_id);
        self
    }
}

/// A user account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Account identifier
    pub email: String,
    /// Eligible to be drawn onto a panel
    #[serde(default)]
    pub is_juror: bool,
    #[serde(default)]
    pub strikes: u32,
    /// Once set, never cleared by moderation
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub notifications: Vec<Notification>,
    /// Owned content items
    #[serde(default)]
    pub posts: Vec<ContentId>,
}

impl Account {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            is_juror: false,
            strikes: 0,
            locked: false,
            notifications: Vec::new(),
            posts: Vec::new(),
        }
    }

    /// An account that can be drawn onto panels
    pub fn juror(email: impl Into<String>) -> Self {
        Self {
            is_juror: true,
            ..Self::new(email)
        }
    }

    pub fn with_strikes(mut self, strikes: u32) -> Self {
        self.strikes = strikes;
        self.locked = self.locked || strikes >= STRIKE_LOCK_THRESHOLD;
        self
    }

    /// Add one strike, locking the account once the threshold is reached
    ///
    /// Returns `true` if this strike locked the account.
    pub fn issue_strike(&mut self) -> bool {
        self.strikes = self.strikes.saturating_add(1);
        if self.strikes >= STRIKE_LOCK_THRESHOLD && !self.locked {
            self.locked = true;
            return true;
        }
        false
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Remove an owned post; returns whether it was present
    pub fn remove_post(&mut self, id: &ContentId) -> bool {
        let before = self.posts.len();
        self.posts.retain(|p| p != id);
        self.posts.len() != before
    }

    pub fn add_post(&mut self, id: ContentId) {
        if !self.posts.contains(&id) {
            self.posts.push(id);
        }
    }

    /// Apply a moderation update in place
    pub fn apply(&mut self, update: AccountUpdate) {
        match update {
            AccountUpdate::IssueStrike => {
                self.issue_strike();
            }
            AccountUpdate::Notify(notification) => self.notify(notification),
            AccountUpdate::AddPost(id) => self.add_post(id),
            AccountUpdate::RemovePost(id) => {
                self.remove_post(&id);
            }
        }
    }
}

/// A single change moderation makes to an account
///
/// Storage adapters apply these atomically per account, so concurrent
/// strikes on the same author are never lost.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum AccountUpdate {
    /// Add one strike (locks at [`STRIKE_LOCK_THRESHOLD`])
    IssueStrike,
    /// Append a notification record
    Notify(Notification),
    /// Record a newly submitted post
    AddPost(ContentId),
    /// Forget a removed post
    RemovePost(ContentId),
}

impl AccountUpdate {
    pub fn kind(&self) -> &'static str {
        match self {
            AccountUpdate::IssueStrike => "issueStrike",
            AccountUpdate::Notify(_) => "notify",
            AccountUpdate::AddPost(_) => "addPost",
            AccountUpdate::RemovePost(_) => "removePost",
        }
    }
}
