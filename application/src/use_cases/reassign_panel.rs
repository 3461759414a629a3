//! Reassign panel use case
//!
//! Operator recovery for items whose panel could not be filled. Draws a
//! fresh panel for an active item that has none, skipping the author and
//! the jurors of the round that produced the last tie.

use crate::config::ModerationConfig;
use crate::ports::moderation_logger::{ModerationEvent, ModerationLogger, NoModerationLogger};
use crate::ports::moderation_store::{ModerationStore, StoreError, StoredContent};
use crate::use_cases::select_jurors::JurorSelector;
use crate::use_cases::shared::{Attempt, committed, retry_on_conflict};
use jury_domain::{ContentId, ModerationStatus};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while reassigning a panel.
#[derive(Error, Debug)]
pub enum ReassignPanelError {
    #[error("Panel for {content_id} not reassigned after {attempts} conflicting attempts, try again")]
    Conflict { content_id: ContentId, attempts: u32 },

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// What a reassignment did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum PanelOutcome {
    ContentMissing,
    /// The item already has a panel; nothing changed
    AlreadyEmpaneled { panel: Vec<String> },
    /// The item is not under moderation
    NotActive { status: ModerationStatus },
    Assigned { panel: Vec<String> },
    /// Still nobody eligible
    Stalled,
}

/// Use case for seating a panel on a stalled item
pub struct ReassignPanelUseCase<S: ModerationStore + 'static> {
    store: Arc<S>,
    selector: JurorSelector<S>,
    logger: Arc<dyn ModerationLogger>,
    config: ModerationConfig,
}

impl<S: ModerationStore + 'static> ReassignPanelUseCase<S> {
    pub fn new(store: Arc<S>, config: ModerationConfig) -> Self {
        Self {
            selector: JurorSelector::new(store.clone()),
            store,
            logger: Arc::new(NoModerationLogger),
            config,
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn ModerationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_selector(mut self, selector: JurorSelector<S>) -> Self {
        self.selector = selector;
        self
    }

    pub async fn execute(&self, content_id: &ContentId) -> Result<PanelOutcome, ReassignPanelError> {
        let attempts = self.config.max_commit_attempts;

        let Some(outcome) =
            retry_on_conflict(attempts, content_id, move || self.attempt_reassign(content_id))
                .await?
        else {
            return Err(ReassignPanelError::Conflict {
                content_id: content_id.clone(),
                attempts: attempts.max(1),
            });
        };

        match &outcome {
            PanelOutcome::Assigned { panel } => {
                info!("Seated {} jurors on {}", panel.len(), content_id);
                self.logger.log(ModerationEvent::new(
                    "panel_assigned",
                    json!({ "content_id": content_id.as_str(), "jurors": panel, "reason": "reassign" }),
                ));
            }
            PanelOutcome::Stalled => {
                warn!("{} is still stalled: no eligible jurors", content_id);
                self.logger.log(ModerationEvent::new(
                    "panel_stalled",
                    json!({ "content_id": content_id.as_str() }),
                ));
            }
            _ => {}
        }
        Ok(outcome)
    }

    async fn attempt_reassign(
        &self,
        content_id: &ContentId,
    ) -> Result<Attempt<PanelOutcome>, ReassignPanelError> {
        let Some(StoredContent { mut item, revision }) = self.store.get_content(content_id).await?
        else {
            return Ok(Attempt::Done(PanelOutcome::ContentMissing));
        };

        if !item.status.is_active() {
            return Ok(Attempt::Done(PanelOutcome::NotActive {
                status: item.status,
            }));
        }
        if !item.jurors.is_empty() {
            return Ok(Attempt::Done(PanelOutcome::AlreadyEmpaneled {
                panel: item.jurors,
            }));
        }

        let mut excluded = item.previous_jurors.clone();
        excluded.push(item.author.clone());
        let panel = self
            .selector
            .select_jurors(self.config.panel_size, &excluded)
            .await?;
        if panel.is_empty() {
            return Ok(Attempt::Done(PanelOutcome::Stalled));
        }

        let status = item.status;
        item.assign_panel(panel.clone(), status);
        if !committed(self.store.commit_content(&item, revision).await)? {
            return Ok(Attempt::Conflict);
        }
        Ok(Attempt::Done(PanelOutcome::Assigned { panel }))
    }
}
