//! Moderation storage port
//!
//! Defines the interface the moderation use cases need from persistence.
//!
//! Content writes use optimistic concurrency: every stored item carries a
//! `revision`, and [`ModerationStore::commit_content`] /
//! [`ModerationStore::delete_content`] only succeed when the caller's
//! expected revision still matches. A mismatch is reported as
//! [`StoreError::Conflict`] and the caller retries from a fresh read.
//!
//! Account writes are expressed as [`AccountUpdate`] records that the
//! adapter applies atomically per account.

use async_trait::async_trait;
use jury_domain::{Account, AccountUpdate, ContentId, ContentItem};
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Write conflict on content {id}: expected revision {expected}")]
    Conflict { id: ContentId, expected: u64 },

    #[error("Content already exists: {0}")]
    ContentExists(ContentId),

    #[error("Account already exists: {0}")]
    AccountExists(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Storage I/O error: {0}")]
    Io(String),

    #[error("Other storage error: {0}")]
    Other(String),
}

impl StoreError {
    /// Check if this error is a lost optimistic-concurrency race
    pub fn is_conflict(&self) -> bool {
        matches!(self, StoreError::Conflict { .. })
    }
}

/// A content item together with its storage revision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredContent {
    pub item: ContentItem,
    pub revision: u64,
}

/// Which content items to list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentFilter {
    All,
    /// Items whose current panel includes this juror
    AssignedTo(String),
    /// Items written by this author
    AuthoredBy(String),
}

impl ContentFilter {
    pub fn matches(&self, item: &ContentItem) -> bool {
        match self {
            ContentFilter::All => true,
            ContentFilter::AssignedTo(juror) => item.is_on_panel(juror),
            ContentFilter::AuthoredBy(author) => &item.author == author,
        }
    }
}

/// Which accounts to list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountFilter {
    All,
    /// Accounts flagged as eligible jurors
    Jurors,
}

impl AccountFilter {
    pub fn matches(&self, account: &Account) -> bool {
        match self {
            AccountFilter::All => true,
            AccountFilter::Jurors => account.is_juror,
        }
    }
}

/// Persistence for content items and accounts
///
/// This port defines how the application layer reads and writes moderation
/// state. Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ModerationStore: Send + Sync {
    /// Load a content item and its current revision
    async fn get_content(&self, id: &ContentId) -> Result<Option<StoredContent>, StoreError>;

    /// Replace a content item if its revision is still `expected_revision`
    ///
    /// Returns the new revision. A missing item is a conflict too: it was
    /// removed after the caller read it.
    async fn commit_content(
        &self,
        item: &ContentItem,
        expected_revision: u64,
    ) -> Result<u64, StoreError>;

    /// Permanently delete a content item if its revision is still `expected_revision`
    async fn delete_content(&self, id: &ContentId, expected_revision: u64)
    -> Result<(), StoreError>;

    /// Store a new content item
    async fn insert_content(&self, item: ContentItem) -> Result<(), StoreError>;

    /// List content items matching `filter`
    async fn list_content(&self, filter: &ContentFilter) -> Result<Vec<ContentItem>, StoreError>;

    /// List accounts matching `filter`
    async fn list_accounts(&self, filter: AccountFilter) -> Result<Vec<Account>, StoreError>;

    /// Load an account
    async fn get_account(&self, email: &str) -> Result<Option<Account>, StoreError>;

    /// Apply `update` to an account atomically
    ///
    /// Returns the account as it is after the update, or `None` if there is
    /// no such account.
    async fn update_account(
        &self,
        email: &str,
        update: AccountUpdate,
    ) -> Result<Option<Account>, StoreError>;

    /// Store a new account
    async fn insert_account(&self, account: Account) -> Result<(), StoreError>;
}
