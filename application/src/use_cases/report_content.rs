//! Report content use case
//!
//! Counts user reports against a content item and seats a panel once the
//! configured threshold is reached.

use crate::config::ModerationConfig;
use crate::ports::moderation_logger::{ModerationEvent, ModerationLogger, NoModerationLogger};
use crate::ports::moderation_store::{ModerationStore, StoreError, StoredContent};
use crate::use_cases::select_jurors::JurorSelector;
use crate::use_cases::shared::{Attempt, committed, retry_on_conflict};
use jury_domain::{ContentId, ContentItem, ModerationStatus, resolve_outcome};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info};

/// Errors that can occur while reporting content.
#[derive(Error, Debug)]
pub enum ReportContentError {
    #[error("{reporter} cannot report their own content {content_id}")]
    SelfReport {
        content_id: ContentId,
        reporter: String,
    },

    #[error("Report on {content_id} not recorded after {attempts} conflicting attempts, try again")]
    Conflict { content_id: ContentId, attempts: u32 },

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// Input for reporting a content item.
#[derive(Debug, Clone)]
pub struct ReportContentInput {
    pub content_id: ContentId,
    pub reporter: String,
}

impl ReportContentInput {
    pub fn new(content_id: impl Into<ContentId>, reporter: impl Into<String>) -> Self {
        Self {
            content_id: content_id.into(),
            reporter: reporter.into(),
        }
    }
}

/// What a report did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum ReportOutcome {
    ContentMissing,
    /// Report counted, no panel change
    #[serde(rename_all = "camelCase")]
    Counted { report_count: u32 },
    /// Threshold reached and a panel was seated
    #[serde(rename_all = "camelCase")]
    PanelAssigned {
        report_count: u32,
        panel: Vec<String>,
    },
    /// Threshold reached but nobody was eligible to sit
    #[serde(rename_all = "camelCase")]
    PanelStalled { report_count: u32 },
}

/// Use case for reporting content
pub struct ReportContentUseCase<S: ModerationStore + 'static> {
    store: Arc<S>,
    selector: JurorSelector<S>,
    logger: Arc<dyn ModerationLogger>,
    config: ModerationConfig,
}

impl<S: ModerationStore + 'static> ReportContentUseCase<S> {
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

    pub async fn execute(
        &self,
        input: ReportContentInput,
    ) -> Result<ReportOutcome, ReportContentError> {
        let input = &input;
        let attempts = self.config.max_commit_attempts;

        let Some(outcome) = retry_on_conflict(attempts, &input.content_id, move || {
            self.attempt_report(input)
        })
        .await?
        else {
            return Err(ReportContentError::Conflict {
                content_id: input.content_id.clone(),
                attempts: attempts.max(1),
            });
        };

        let id = input.content_id.as_str();
        match &outcome {
            ReportOutcome::ContentMissing => {
                debug!("Report on missing content {} ignored", id);
            }
            ReportOutcome::Counted { report_count } => {
                info!("{} reported by {} ({} reports)", id, input.reporter, report_count);
            }
            ReportOutcome::PanelAssigned {
                report_count,
                panel,
            } => {
                info!(
                    "{} reached {} reports, seated a panel of {}",
                    id,
                    report_count,
                    panel.len()
                );
                self.logger.log(ModerationEvent::new(
                    "panel_assigned",
                    json!({ "content_id": id, "jurors": panel, "reason": "report" }),
                ));
            }
            ReportOutcome::PanelStalled { report_count } => {
                error!(
                    "{} reached {} reports but no eligible jurors are left",
                    id, report_count
                );
                self.logger.log(ModerationEvent::new(
                    "panel_stalled",
                    json!({ "content_id": id, "status": ModerationStatus::UnderReview }),
                ));
            }
        }
        Ok(outcome)
    }

    async fn attempt_report(
        &self,
        input: &ReportContentInput,
    ) -> Result<Attempt<ReportOutcome>, ReportContentError> {
        let Some(StoredContent { mut item, revision }) =
            self.store.get_content(&input.content_id).await?
        else {
            return Ok(Attempt::Done(ReportOutcome::ContentMissing));
        };

        if item.author == input.reporter {
            return Err(ReportContentError::SelfReport {
                content_id: item.id.clone(),
                reporter: input.reporter.clone(),
            });
        }

        item.report_count = item.report_count.saturating_add(1);
        let report_count = item.report_count;

        let outcome = if self.needs_panel(&item) {
            let excluded = vec![item.author.clone(), input.reporter.clone()];
            let panel = self
                .selector
                .select_jurors(self.config.panel_size, &excluded)
                .await?;
            if panel.is_empty() {
                ReportOutcome::PanelStalled { report_count }
            } else {
                let status = resolve_outcome(&[], Some(panel.len()));
                item.assign_panel(panel.clone(), status);
                // Only an item no panel has ruled on is unhidden
                if item.moderation_history.is_empty() {
                    item.hidden = false;
                }
                ReportOutcome::PanelAssigned {
                    report_count,
                    panel,
                }
            }
        } else {
            ReportOutcome::Counted { report_count }
        };

        if !committed(self.store.commit_content(&item, revision).await)? {
            return Ok(Attempt::Conflict);
        }
        Ok(Attempt::Done(outcome))
    }

    /// Threshold reached on an item nobody is reviewing
    fn needs_panel(&self, item: &ContentItem) -> bool {
        item.report_count >= self.config.report_threshold
            && item.jurors.is_empty()
            && !item.revote_round
            && matches!(
                item.status,
                ModerationStatus::UnderReview | ModerationStatus::Appropriate
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{MockStore, RecordingLogger, juror_emails};
    use jury_domain::Account;

    const AUTHOR: &str = "author@example.com";
    const REPORTER: &str = "reader@example.com";

    fn setup(pool: usize, config: ModerationConfig) -> (Arc<MockStore>, Arc<RecordingLogger>, ReportContentUseCase<MockStore>) {
        let store = Arc::new(MockStore::new());
        for email in juror_emails(pool) {
            store.add_account(Account::juror(email));
        }
        store.add_account(Account::juror(AUTHOR));
        store.add_account(Account::juror(REPORTER));
        store.add_content(ContentItem::new("post-1", AUTHOR, "hello"));

        let logger = Arc::new(RecordingLogger::default());
        let use_case = ReportContentUseCase::new(store.clone(), config)
            .with_selector(JurorSelector::with_seed(store.clone(), 11))
            .with_logger(logger.clone());
        (store, logger, use_case)
    }

    #[tokio::test]
    async fn test_first_report_seats_panel() {
        let (store, logger, use_case) = setup(8, ModerationConfig::default());

        let outcome = use_case
            .execute(ReportContentInput::new("post-1", REPORTER))
            .await
            .unwrap();

        let ReportOutcome::PanelAssigned {
            report_count,
            panel,
        } = outcome
        else {
            panic!("expected a panel, got {:?}", outcome);
        };
        assert_eq!(report_count, 1);
        assert_eq!(panel.len(), 5);
        assert!(!panel.contains(&AUTHOR.to_string()));
        assert!(!panel.contains(&REPORTER.to_string()));

        let item = store.content("post-1").unwrap();
        assert_eq!(item.jurors, panel);
        assert_eq!(item.status, ModerationStatus::UnderReview);
        assert_eq!(logger.events_of("panel_assigned").len(), 1);
    }

    #[tokio::test]
    async fn test_panel_unhides_only_unresolved_items() {
        let (store, _, use_case) = setup(8, ModerationConfig::default());
        let mut fresh = ContentItem::new("post-1", AUTHOR, "hello");
        fresh.hidden = true;
        store.add_content(fresh);

        let mut ruled = ContentItem::new("post-2", AUTHOR, "again");
        ruled.record_decision(ModerationStatus::Appropriate);
        ruled.status = ModerationStatus::Appropriate;
        ruled.hidden = true;
        store.add_content(ruled);

        for id in ["post-1", "post-2"] {
            let outcome = use_case
                .execute(ReportContentInput::new(id, REPORTER))
                .await
                .unwrap();
            assert!(matches!(outcome, ReportOutcome::PanelAssigned { .. }));
        }

        assert!(!store.content("post-1").unwrap().hidden);
        let ruled = store.content("post-2").unwrap();
        assert!(ruled.hidden);
        assert_eq!(ruled.status, ModerationStatus::UnderReview);
    }

    #[tokio::test]
    async fn test_reports_below_threshold_only_count() {
        let (store, _, use_case) = setup(8, ModerationConfig::default().with_report_threshold(3));

        for expected in 1..=2 {
            let outcome = use_case
                .execute(ReportContentInput::new("post-1", REPORTER))
                .await
                .unwrap();
            assert_eq!(outcome, ReportOutcome::Counted { report_count: expected });
        }
        let outcome = use_case
            .execute(ReportContentInput::new("post-1", "other@example.com"))
            .await
            .unwrap();
        assert!(matches!(outcome, ReportOutcome::PanelAssigned { report_count: 3, .. }));
        assert_eq!(store.content("post-1").unwrap().report_count, 3);
    }

    #[tokio::test]
    async fn test_report_on_empaneled_item_does_not_redraw() {
        let (store, _, use_case) = setup(8, ModerationConfig::default());
        use_case
            .execute(ReportContentInput::new("post-1", REPORTER))
            .await
            .unwrap();
        let panel = store.content("post-1").unwrap().jurors;

        let outcome = use_case
            .execute(ReportContentInput::new("post-1", "other@example.com"))
            .await
            .unwrap();

        assert_eq!(outcome, ReportOutcome::Counted { report_count: 2 });
        assert_eq!(store.content("post-1").unwrap().jurors, panel);
    }

    #[tokio::test]
    async fn test_empty_pool_stalls() {
        let (store, logger, use_case) = setup(0, ModerationConfig::default());

        let outcome = use_case
            .execute(ReportContentInput::new("post-1", REPORTER))
            .await
            .unwrap();

        assert_eq!(outcome, ReportOutcome::PanelStalled { report_count: 1 });
        let item = store.content("post-1").unwrap();
        assert!(item.jurors.is_empty());
        assert_eq!(item.report_count, 1);
        assert_eq!(logger.events_of("panel_stalled").len(), 1);
    }

    #[tokio::test]
    async fn test_self_report_and_missing_content() {
        let (_, _, use_case) = setup(8, ModerationConfig::default());

        let err = use_case
            .execute(ReportContentInput::new("post-1", AUTHOR))
            .await
            .unwrap_err();
        assert!(matches!(err, ReportContentError::SelfReport { .. }));

        let outcome = use_case
            .execute(ReportContentInput::new("gone", REPORTER))
            .await
            .unwrap();
        assert_eq!(outcome, ReportOutcome::ContentMissing);
    }

    #[tokio::test]
    async fn test_hidden_revision_item_only_counts() {
        let (store, _, use_case) = setup(8, ModerationConfig::default());
        let mut item = store.content("post-1").unwrap();
        item.hide_for_revision();
        store.add_content(item);

        let outcome = use_case
            .execute(ReportContentInput::new("post-1", REPORTER))
            .await
            .unwrap();

        assert_eq!(outcome, ReportOutcome::Counted { report_count: 1 });
        assert!(store.content("post-1").unwrap().hidden);
    }
}
