//! Account side effects of a resolved vote.
//!
//! These run after the content commit succeeded. Each is an independent
//! per-account update; a failure is logged with the pending update so it
//! can be replayed, and never undoes the content write.

use super::ModerationCoordinator;
use crate::ports::moderation_logger::ModerationEvent;
use crate::ports::moderation_store::ModerationStore;
use futures::future::join_all;
use jury_domain::{Account, AccountUpdate, ContentId, Notification, STRIKE_LOCK_THRESHOLD};
use serde_json::json;
use tracing::{error, info, warn};

pub(super) const REMOVAL_MESSAGE: &str = "Content you reviewed or authored was removed";

/// Account writes owed by a committed vote
#[derive(Debug, Default)]
pub(super) struct Consequences {
    /// Author to strike
    pub strike: Option<String>,
    /// Accounts to tell about a removal
    pub notify: Vec<String>,
    /// Author whose post list must drop the item
    pub forget_post: Option<String>,
}

impl Consequences {
    pub fn is_empty(&self) -> bool {
        self.strike.is_none() && self.notify.is_empty() && self.forget_post.is_none()
    }
}

impl<S: ModerationStore + 'static> ModerationCoordinator<S> {
    pub(super) async fn apply_consequences(&self, content_id: &ContentId, owed: Consequences) {
        if owed.is_empty() {
            return;
        }

        if let Some(author) = &owed.strike {
            self.issue_strike(content_id, author).await;
        }

        if !owed.notify.is_empty() {
            let notification = Notification::new(REMOVAL_MESSAGE).about(content_id.clone());
            let sends = owed.notify.iter().map(|email| {
                self.apply_account_update(
                    content_id,
                    email,
                    AccountUpdate::Notify(notification.clone()),
                )
            });
            join_all(sends).await;
        }

        if let Some(author) = &owed.forget_post {
            self.apply_account_update(
                content_id,
                author,
                AccountUpdate::RemovePost(content_id.clone()),
            )
            .await;
        }
    }

    async fn issue_strike(&self, content_id: &ContentId, author: &str) {
        let Some(account) = self
            .apply_account_update(content_id, author, AccountUpdate::IssueStrike)
            .await
        else {
            return;
        };

        info!(
            "Strike {} issued to {} over {}",
            account.strikes, author, content_id
        );
        self.logger.log(ModerationEvent::new(
            "strike_issued",
            json!({
                "content_id": content_id.as_str(),
                "account": author,
                "strikes": account.strikes,
            }),
        ));

        if account.locked && account.strikes == STRIKE_LOCK_THRESHOLD {
            warn!("Account {} locked after {} strikes", author, account.strikes);
            self.logger.log(ModerationEvent::new(
                "account_locked",
                json!({
                    "account": author,
                    "strikes": account.strikes,
                }),
            ));
        }
    }

    /// Apply one account update, logging instead of failing
    ///
    /// Returns the updated account, or `None` when the account is missing or
    /// the write failed.
    async fn apply_account_update(
        &self,
        content_id: &ContentId,
        email: &str,
        update: AccountUpdate,
    ) -> Option<Account> {
        let kind = update.kind();
        let pending = serde_json::to_value(&update).unwrap_or_default();

        match self.store.update_account(email, update).await {
            Ok(Some(account)) => Some(account),
            Ok(None) => {
                warn!(
                    "Account {} not found while applying {} for {}",
                    email, kind, content_id
                );
                None
            }
            Err(e) => {
                error!(
                    "Failed to apply {} to {} for {}: {}",
                    kind, email, content_id, e
                );
                self.logger.log(ModerationEvent::new(
                    "side_effect_failed",
                    json!({
                        "content_id": content_id.as_str(),
                        "account": email,
                        "update": pending,
                        "error": e.to_string(),
                    }),
                ));
                None
            }
        }
    }
}
