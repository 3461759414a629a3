//! Review queue use case
//!
//! Read-only views over the content store: what a juror still has to vote
//! on, and which of an author's items are drawing moderation.

use crate::ports::moderation_store::{ContentFilter, ModerationStore, StoreError};
use jury_domain::ContentItem;
use std::sync::Arc;

/// Use case for listing moderation work
pub struct ReviewQueueUseCase<S: ModerationStore + 'static> {
    store: Arc<S>,
}

impl<S: ModerationStore + 'static> ReviewQueueUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Items `juror` is empaneled on and has not voted on yet
    pub async fn pending_for_juror(&self, juror: &str) -> Result<Vec<ContentItem>, StoreError> {
        let items = self
            .store
            .list_content(&ContentFilter::AssignedTo(juror.to_string()))
            .await?;
        Ok(items
            .into_iter()
            .filter(|item| item.status.is_active() && !item.has_voted(juror))
            .collect())
    }

    /// The author's items that are reported, under moderation or hidden
    pub async fn reported_for_author(&self, author: &str) -> Result<Vec<ContentItem>, StoreError> {
        let items = self
            .store
            .list_content(&ContentFilter::AuthoredBy(author.to_string()))
            .await?;
        Ok(items
            .into_iter()
            .filter(|item| item.report_count > 0 || item.status.is_active() || item.hidden)
            .collect())
    }
}
