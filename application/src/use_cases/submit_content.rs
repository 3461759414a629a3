//! Submit content use case
//!
//! Stores a new post and records it on the author's account.

use crate::ports::moderation_store::{ModerationStore, StoreError};
use jury_domain::{AccountUpdate, ContentId, ContentItem};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum SubmitContentError {
    #[error("Author not found: {0}")]
    AuthorNotFound(String),

    #[error("Account {0} is locked and cannot post")]
    AuthorLocked(String),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// Input for submitting content.
#[derive(Debug, Clone)]
pub struct SubmitContentInput {
    pub content_id: ContentId,
    pub author: String,
    pub content: String,
}

impl SubmitContentInput {
    pub fn new(
        content_id: impl Into<ContentId>,
        author: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            content_id: content_id.into(),
            author: author.into(),
            content: content.into(),
        }
    }
}

/// Use case for publishing a post
pub struct SubmitContentUseCase<S: ModerationStore + 'static> {
    store: Arc<S>,
}

impl<S: ModerationStore + 'static> SubmitContentUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, input: SubmitContentInput) -> Result<ContentItem, SubmitContentError> {
        let author = self
            .store
            .get_account(&input.author)
            .await?
            .ok_or_else(|| SubmitContentError::AuthorNotFound(input.author.clone()))?;
        if author.locked {
            return Err(SubmitContentError::AuthorLocked(author.email));
        }

        let item = ContentItem::new(input.content_id, input.author, input.content);
        self.store.insert_content(item.clone()).await?;
        self.store
            .update_account(&item.author, AccountUpdate::AddPost(item.id.clone()))
            .await?;

        info!("{} posted {}", item.author, item.id);
        Ok(item)
    }
}
