//! Cast vote use case
//!
//! This module provides the [`ModerationCoordinator`], which records a
//! juror's vote on a content item and carries out whatever the vote decides.
//!
//! # Overview
//!
//! A vote is an optimistic read-modify-write of one content item:
//!
//! 1. **Load** - read the item and its storage revision
//! 2. **Admit** - reject self-votes, off-panel jurors and off-ballot choices
//! 3. **Resolve** - append the vote and resolve the round
//! 4. **Commit** - compare-and-swap on the revision (or delete, on removal);
//!    a lost race re-reads and recomputes
//! 5. **Side effects** - strikes and notifications, after the commit
//!
//! # Usage
//!
//! ```ignore
//! use jury_application::{CastVoteInput, ModerationCoordinator, ModerationConfig};
//!
//! let coordinator = ModerationCoordinator::new(store, ModerationConfig::default());
//! let outcome = coordinator
//!     .cast_vote(CastVoteInput::new("post-1", "juror@example.com", VoteChoice::Appropriate))
//!     .await?;
//! ```

mod consequences;
mod types;

pub use types::{CastVoteError, CastVoteInput, VoteOutcome};

use crate::config::ModerationConfig;
use crate::ports::moderation_logger::{ModerationEvent, ModerationLogger, NoModerationLogger};
use crate::ports::moderation_store::{ModerationStore, StoredContent};
use crate::use_cases::select_jurors::JurorSelector;
use crate::use_cases::shared::{Attempt, committed, retry_on_conflict};
use consequences::Consequences;
use jury_domain::{
    ContentItem, ModerationStatus, Vote, VoteChoice, VoteTally, resolve_outcome, warrants_strike,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Records votes and applies the verdicts they produce.
pub struct ModerationCoordinator<S: ModerationStore + 'static> {
    store: Arc<S>,
    selector: JurorSelector<S>,
    logger: Arc<dyn ModerationLogger>,
    config: ModerationConfig,
}

impl<S: ModerationStore + 'static> ModerationCoordinator<S> {
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

    /// Replace the juror selector (e.g. with a seeded one)
    pub fn with_selector(mut self, selector: JurorSelector<S>) -> Self {
        self.selector = selector;
        self
    }

    pub fn config(&self) -> &ModerationConfig {
        &self.config
    }

    /// Record a vote and apply its consequences
    ///
    /// Missing content and repeated votes are silent no-ops reported through
    /// [`VoteOutcome`]. Account side effects never fail the vote once the
    /// content write has landed.
    pub async fn cast_vote(&self, input: CastVoteInput) -> Result<VoteOutcome, CastVoteError> {
        let input = &input;
        let attempts = self.config.max_commit_attempts;

        let Some((outcome, owed)) = retry_on_conflict(attempts, &input.content_id, move || {
            self.attempt_vote(input)
        })
        .await?
        else {
            return Err(CastVoteError::Conflict {
                content_id: input.content_id.clone(),
                attempts: attempts.max(1),
            });
        };

        self.log_outcome(input, &outcome);
        self.apply_consequences(&input.content_id, owed).await;
        Ok(outcome)
    }

    /// One read-compute-commit pass
    async fn attempt_vote(
        &self,
        input: &CastVoteInput,
    ) -> Result<Attempt<(VoteOutcome, Consequences)>, CastVoteError> {
        let Some(StoredContent { mut item, revision }) =
            self.store.get_content(&input.content_id).await?
        else {
            debug!("Vote on missing content {} ignored", input.content_id);
            return Ok(Attempt::Done((VoteOutcome::ContentMissing, Consequences::default())));
        };

        if item.has_voted(&input.juror) {
            debug!(
                "{} already voted on {}, ignoring",
                input.juror, input.content_id
            );
            return Ok(Attempt::Done((VoteOutcome::Duplicate, Consequences::default())));
        }

        self.admit(&item, input)?;

        let prior_history = item.moderation_history.clone();
        item.record_vote(Vote::new(input.juror.clone(), input.choice));
        let status = resolve_outcome(&item.votes, Some(item.panel_size()));

        if status.is_resolved() {
            item.record_decision(status);
        }

        if status == ModerationStatus::Revote {
            return self.start_revote(item, revision).await;
        }

        let mut owed = Consequences::default();
        let strike = status.is_resolved() && warrants_strike(status, &prior_history);
        if strike {
            owed.strike = Some(item.author.clone());
        }

        let outcome = match status {
            ModerationStatus::Appropriate => {
                item.clear_after_approval();
                VoteOutcome::Resolved { status, strike }
            }
            ModerationStatus::Revision => {
                item.hide_for_revision();
                VoteOutcome::Resolved { status, strike }
            }
            ModerationStatus::Inappropriate => {
                let notified = item.stakeholders();
                if !committed(self.store.delete_content(&item.id, revision).await)? {
                    return Ok(Attempt::Conflict);
                }
                owed.notify = notified.clone();
                owed.forget_post = Some(item.author.clone());
                return Ok(Attempt::Done((VoteOutcome::Removed { notified }, owed)));
            }
            _ => {
                // Round still open; `revote_round` keeps marking a revote
                item.status = status;
                VoteOutcome::Recorded {
                    status: item.status,
                    votes: item.votes.len(),
                    panel_size: item.panel_size(),
                }
            }
        };

        if !committed(self.store.commit_content(&item, revision).await)? {
            return Ok(Attempt::Conflict);
        }
        Ok(Attempt::Done((outcome, owed)))
    }

    fn admit(&self, item: &ContentItem, input: &CastVoteInput) -> Result<(), CastVoteError> {
        if !input.choice.is_counted() {
            return Err(CastVoteError::UnknownChoice {
                content_id: item.id.clone(),
                juror: input.juror.clone(),
            });
        }
        if item.author == input.juror {
            return Err(CastVoteError::SelfVote {
                content_id: item.id.clone(),
                juror: input.juror.clone(),
            });
        }
        if self.config.enforce_panel_membership && !item.is_on_panel(&input.juror) {
            return Err(CastVoteError::NotOnPanel {
                content_id: item.id.clone(),
                juror: input.juror.clone(),
            });
        }
        if item.revote_round
            && !item.revote_options.is_empty()
            && !item.revote_options.contains(&input.choice)
        {
            return Err(CastVoteError::ChoiceNotOffered {
                content_id: item.id.clone(),
                choice: input.choice,
                options: item.revote_options.clone(),
            });
        }
        Ok(())
    }

    /// Seat a fresh panel on the tied categories
    ///
    /// Everyone who voted in the tied round and the author are excluded.
    /// Selection reads the directory outside the commit; a conflict simply
    /// draws again on the next attempt.
    async fn start_revote(
        &self,
        mut item: ContentItem,
        revision: u64,
    ) -> Result<Attempt<(VoteOutcome, Consequences)>, CastVoteError> {
        let options: Vec<VoteChoice> = VoteTally::from_votes(&item.votes).leaders();
        let mut excluded = item.voters();
        excluded.push(item.author.clone());

        let panel = self
            .selector
            .select_jurors(self.config.panel_size, &excluded)
            .await?;
        item.begin_revote(panel.clone(), options.clone());

        if !committed(self.store.commit_content(&item, revision).await)? {
            return Ok(Attempt::Conflict);
        }

        let outcome = if panel.is_empty() {
            VoteOutcome::RevoteStalled { options }
        } else {
            VoteOutcome::RevoteStarted { options, panel }
        };
        Ok(Attempt::Done((outcome, Consequences::default())))
    }

    /// Trace and audit a committed vote
    fn log_outcome(&self, input: &CastVoteInput, outcome: &VoteOutcome) {
        if outcome.is_noop() {
            return;
        }
        let id = input.content_id.as_str();

        self.logger.log(ModerationEvent::new(
            "vote_recorded",
            json!({
                "content_id": id,
                "juror": input.juror,
                "vote": input.choice,
            }),
        ));

        match outcome {
            VoteOutcome::Recorded {
                votes, panel_size, ..
            } => {
                info!(
                    "Vote by {} on {} recorded ({}/{})",
                    input.juror, id, votes, panel_size
                );
            }
            VoteOutcome::RevoteStarted { options, panel } => {
                warn!(
                    "Revote triggered for {} with options: {}",
                    id,
                    join_choices(options)
                );
                self.logger.log(ModerationEvent::new(
                    "revote_triggered",
                    json!({ "content_id": id, "options": options, "jurors": panel }),
                ));
            }
            VoteOutcome::RevoteStalled { options } => {
                error!(
                    "Revote for {} stalled: no eligible jurors left (options: {})",
                    id,
                    join_choices(options)
                );
                self.logger.log(ModerationEvent::new(
                    "revote_triggered",
                    json!({ "content_id": id, "options": options, "jurors": [] }),
                ));
                self.logger.log(ModerationEvent::new(
                    "panel_stalled",
                    json!({ "content_id": id, "status": ModerationStatus::Revote }),
                ));
            }
            VoteOutcome::Resolved { status, strike } => {
                info!("{} resolved as {}", id, status);
                self.logger.log(ModerationEvent::new(
                    "content_resolved",
                    json!({ "content_id": id, "decision": status, "strike": strike }),
                ));
            }
            VoteOutcome::Removed { notified } => {
                info!("{} removed, notifying {} accounts", id, notified.len());
                self.logger.log(ModerationEvent::new(
                    "content_removed",
                    json!({ "content_id": id, "notified": notified }),
                ));
            }
            VoteOutcome::ContentMissing | VoteOutcome::Duplicate => {}
        }
    }
}

fn join_choices(choices: &[VoteChoice]) -> String {
    choices
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(" & ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{MockStore, RecordingLogger, juror_emails};
    use jury_domain::{Account, ContentId, ModerationEntry};

    const AUTHOR: &str = "author@example.com";
    const POST: &str = "post-1";

    struct Fixture {
        store: Arc<MockStore>,
        logger: Arc<RecordingLogger>,
        coordinator: ModerationCoordinator<MockStore>,
    }

    fn fixture_with(pool: usize, author: Account, config: ModerationConfig) -> Fixture {
        let store = Arc::new(MockStore::new());
        for email in juror_emails(pool) {
            store.add_account(Account::juror(email));
        }
        let mut author = author;
        author.add_post(ContentId::new(POST));
        store.add_account(author);
        store.add_content(ContentItem::new(POST, AUTHOR, "hello world").with_jurors(juror_emails(5)));

        let logger = Arc::new(RecordingLogger::default());
        let coordinator = ModerationCoordinator::new(store.clone(), config)
            .with_selector(JurorSelector::with_seed(store.clone(), 7))
            .with_logger(logger.clone());
        Fixture {
            store,
            logger,
            coordinator,
        }
    }

    fn fixture(pool: usize) -> Fixture {
        fixture_with(pool, Account::new(AUTHOR), ModerationConfig::default())
    }

    async fn vote(f: &Fixture, juror: &str, choice: VoteChoice) -> Result<VoteOutcome, CastVoteError> {
        f.coordinator
            .cast_vote(CastVoteInput::new(POST, juror, choice))
            .await
    }

    /// Votes cast in order by `jurors[i]`
    async fn vote_round(f: &Fixture, jurors: &[String], choices: &[VoteChoice]) -> Vec<VoteOutcome> {
        let mut outcomes = Vec::new();
        for (juror, choice) in jurors.iter().zip(choices) {
            outcomes.push(vote(f, juror, *choice).await.unwrap());
        }
        outcomes
    }

    #[tokio::test]
    async fn test_appropriate_majority_clears_flags() {
        let f = fixture(10);
        {
            let mut item = f.store.content(POST).unwrap();
            item.report_count = 2;
            f.store.add_content(item);
        }

        let outcomes = vote_round(
            &f,
            &juror_emails(5),
            &[
                VoteChoice::Appropriate,
                VoteChoice::Appropriate,
                VoteChoice::Appropriate,
                VoteChoice::Revision,
                VoteChoice::Revision,
            ],
        )
        .await;

        assert_eq!(
            outcomes[1],
            VoteOutcome::Recorded {
                status: ModerationStatus::UnderReview,
                votes: 2,
                panel_size: 5,
            }
        );
        assert_eq!(
            outcomes[4],
            VoteOutcome::Resolved {
                status: ModerationStatus::Appropriate,
                strike: false,
            }
        );

        let item = f.store.content(POST).unwrap();
        assert_eq!(item.status, ModerationStatus::Appropriate);
        assert_eq!(item.report_count, 0);
        assert!(item.jurors.is_empty());
        assert!(item.votes.is_empty());
        assert!(!item.revote_round);
        assert_eq!(item.moderation_history.len(), 1);
        assert_eq!(
            item.moderation_history[0].decision,
            ModerationStatus::Appropriate
        );
        assert_eq!(f.store.account(AUTHOR).strikes, 0);
        assert!(f.logger.event_types().contains(&"content_resolved"));
    }

    #[tokio::test]
    async fn test_tie_starts_revote_with_fresh_panel() {
        let f = fixture(11);
        let first_panel = juror_emails(5);

        let outcomes = vote_round(
            &f,
            &first_panel,
            &[
                VoteChoice::Inappropriate,
                VoteChoice::Inappropriate,
                VoteChoice::Revision,
                VoteChoice::Revision,
                VoteChoice::Appropriate,
            ],
        )
        .await;

        let VoteOutcome::RevoteStarted { options, panel } = &outcomes[4] else {
            panic!("expected a revote, got {:?}", outcomes[4]);
        };
        assert_eq!(options, &vec![VoteChoice::Revision, VoteChoice::Inappropriate]);
        assert_eq!(panel.len(), 5);
        assert!(panel.iter().all(|j| !first_panel.contains(j) && j != AUTHOR));

        let item = f.store.content(POST).unwrap();
        assert_eq!(item.status, ModerationStatus::Revote);
        assert!(item.votes.is_empty());
        assert!(item.revote_round);
        assert_eq!(&item.jurors, panel);
        assert_eq!(item.previous_jurors, first_panel);
        assert_eq!(item.revote_options, *options);
        // A tie is not a decision
        assert!(item.moderation_history.is_empty());
        assert_eq!(f.logger.events_of("revote_triggered").len(), 1);
    }

    #[tokio::test]
    async fn test_revote_round_accepts_only_tied_options() {
        let f = fixture(11);
        vote_round(
            &f,
            &juror_emails(5),
            &[
                VoteChoice::Inappropriate,
                VoteChoice::Inappropriate,
                VoteChoice::Revision,
                VoteChoice::Revision,
                VoteChoice::Appropriate,
            ],
        )
        .await;
        let panel = f.store.content(POST).unwrap().jurors;

        let err = vote(&f, &panel[0], VoteChoice::Appropriate)
            .await
            .unwrap_err();
        assert!(matches!(err, CastVoteError::ChoiceNotOffered { .. }));

        let outcomes = vote_round(&f, &panel, &[VoteChoice::Revision; 5]).await;
        assert_eq!(
            outcomes[2],
            VoteOutcome::Recorded {
                status: ModerationStatus::UnderReview,
                votes: 3,
                panel_size: 5,
            }
        );
        // First moderation cycle, so no strike
        assert_eq!(
            outcomes[4],
            VoteOutcome::Resolved {
                status: ModerationStatus::Revision,
                strike: false,
            }
        );

        let item = f.store.content(POST).unwrap();
        assert_eq!(item.status, ModerationStatus::Revision);
        assert!(item.hidden);
        assert!(!item.revote_round);
        assert!(item.revote_options.is_empty());
        // Retained for audit
        assert_eq!(item.votes.len(), 5);
        assert_eq!(item.jurors, panel);
    }

    #[tokio::test]
    async fn test_revote_panel_vote_returns_item_to_review() {
        let f = fixture(11);
        vote_round(
            &f,
            &juror_emails(5),
            &[
                VoteChoice::Inappropriate,
                VoteChoice::Inappropriate,
                VoteChoice::Revision,
                VoteChoice::Revision,
                VoteChoice::Appropriate,
            ],
        )
        .await;
        let panel = f.store.content(POST).unwrap().jurors;

        let outcome = vote(&f, &panel[0], VoteChoice::Inappropriate).await.unwrap();
        assert_eq!(
            outcome,
            VoteOutcome::Recorded {
                status: ModerationStatus::UnderReview,
                votes: 1,
                panel_size: 5,
            }
        );

        let item = f.store.content(POST).unwrap();
        assert_eq!(item.status, ModerationStatus::UnderReview);
        assert!(item.revote_round);
        assert_eq!(
            item.revote_options,
            vec![VoteChoice::Revision, VoteChoice::Inappropriate]
        );
    }

    #[tokio::test]
    async fn test_inappropriate_removes_content_and_locks_author() {
        let f = fixture_with(
            10,
            Account::new(AUTHOR).with_strikes(2),
            ModerationConfig::default(),
        );
        let panel = juror_emails(5);

        let outcomes = vote_round(&f, &panel, &[VoteChoice::Inappropriate; 5]).await;

        let mut expected = panel.clone();
        expected.push(AUTHOR.to_string());
        assert_eq!(outcomes[4], VoteOutcome::Removed { notified: expected });
        assert!(f.store.content(POST).is_none());

        let author = f.store.account(AUTHOR);
        assert_eq!(author.strikes, 3);
        assert!(author.locked);
        assert!(author.posts.is_empty());
        assert_eq!(author.notifications.len(), 1);

        for juror in &panel {
            let account = f.store.account(juror);
            assert_eq!(account.notifications.len(), 1);
            assert_eq!(
                account.notifications[0].related_content_id,
                Some(ContentId::new(POST))
            );
            assert_eq!(account.notifications[0].message, consequences::REMOVAL_MESSAGE);
        }

        let events = f.logger.event_types();
        assert!(events.contains(&"content_removed"));
        assert!(events.contains(&"strike_issued"));
        assert!(events.contains(&"account_locked"));
    }

    #[tokio::test]
    async fn test_repeated_vote_is_ignored() {
        let f = fixture(10);

        let first = vote(&f, "juror-0@example.com", VoteChoice::Appropriate)
            .await
            .unwrap();
        let second = vote(&f, "juror-0@example.com", VoteChoice::Inappropriate)
            .await
            .unwrap();

        assert!(!first.is_noop());
        assert_eq!(second, VoteOutcome::Duplicate);
        let item = f.store.content(POST).unwrap();
        assert_eq!(item.votes.len(), 1);
        assert_eq!(item.votes[0].choice, VoteChoice::Appropriate);
        assert_eq!(f.logger.events_of("vote_recorded").len(), 1);
    }

    #[tokio::test]
    async fn test_missing_content_is_a_noop() {
        let f = fixture(10);
        let outcome = f
            .coordinator
            .cast_vote(CastVoteInput::new(
                "no-such-post",
                "juror-0@example.com",
                VoteChoice::Appropriate,
            ))
            .await
            .unwrap();

        assert_eq!(outcome, VoteOutcome::ContentMissing);
        assert!(f.logger.event_types().is_empty());
    }

    #[tokio::test]
    async fn test_admission_rules() {
        let f = fixture(10);

        let err = vote(&f, AUTHOR, VoteChoice::Appropriate).await.unwrap_err();
        assert!(matches!(err, CastVoteError::SelfVote { .. }));

        let err = vote(&f, "juror-9@example.com", VoteChoice::Appropriate)
            .await
            .unwrap_err();
        assert!(matches!(err, CastVoteError::NotOnPanel { .. }));
        assert!(!err.is_transient());
        assert!(f.store.content(POST).unwrap().votes.is_empty());
    }

    #[tokio::test]
    async fn test_unrecognized_choice_does_not_take_a_seat() {
        let f = fixture(10);
        let juror = &juror_emails(5)[0];

        let err = vote(&f, juror, VoteChoice::Unrecognized).await.unwrap_err();
        assert!(matches!(err, CastVoteError::UnknownChoice { .. }));
        assert!(f.store.content(POST).unwrap().votes.is_empty());

        // The seat is still free for a real vote
        let outcome = vote(&f, juror, VoteChoice::Revision).await.unwrap();
        assert!(matches!(outcome, VoteOutcome::Recorded { votes: 1, .. }));
    }

    #[tokio::test]
    async fn test_open_voting_when_membership_not_enforced() {
        let f = fixture_with(
            10,
            Account::new(AUTHOR),
            ModerationConfig::default().with_panel_membership(false),
        );

        let outcome = vote(&f, "juror-9@example.com", VoteChoice::Appropriate)
            .await
            .unwrap();
        assert!(matches!(outcome, VoteOutcome::Recorded { votes: 1, .. }));
    }

    #[tokio::test]
    async fn test_tie_with_exhausted_pool_stalls() {
        let f = fixture(5);

        let outcomes = vote_round(
            &f,
            &juror_emails(5),
            &[
                VoteChoice::Appropriate,
                VoteChoice::Appropriate,
                VoteChoice::Inappropriate,
                VoteChoice::Inappropriate,
                VoteChoice::Revision,
            ],
        )
        .await;

        assert_eq!(
            outcomes[4],
            VoteOutcome::RevoteStalled {
                options: vec![VoteChoice::Appropriate, VoteChoice::Inappropriate],
            }
        );
        let item = f.store.content(POST).unwrap();
        assert_eq!(item.status, ModerationStatus::Revote);
        assert!(item.is_stalled());
        assert_eq!(f.logger.events_of("panel_stalled").len(), 1);

        // Nobody is empaneled, so nobody can vote until a panel is reassigned
        let err = vote(&f, "juror-0@example.com", VoteChoice::Appropriate)
            .await
            .unwrap_err();
        assert!(matches!(err, CastVoteError::NotOnPanel { .. }));
    }

    #[tokio::test]
    async fn test_conflicts_are_retried_from_fresh_read() {
        let f = fixture(10);
        f.store.conflict_next(2);

        let outcome = vote(&f, "juror-0@example.com", VoteChoice::Revision)
            .await
            .unwrap();

        assert!(matches!(outcome, VoteOutcome::Recorded { votes: 1, .. }));
        assert_eq!(f.store.commits.load(std::sync::atomic::Ordering::SeqCst), 1);
        assert_eq!(f.store.content(POST).unwrap().votes.len(), 1);
    }

    #[tokio::test]
    async fn test_conflict_exhaustion_is_transient_error() {
        let f = fixture(10);
        f.store.conflict_next(3);

        let err = vote(&f, "juror-0@example.com", VoteChoice::Revision)
            .await
            .unwrap_err();

        assert!(matches!(err, CastVoteError::Conflict { attempts: 3, .. }));
        assert!(err.is_transient());
        assert!(f.store.content(POST).unwrap().votes.is_empty());
        assert!(f.logger.event_types().is_empty());
    }

    #[tokio::test]
    async fn test_failed_side_effects_do_not_roll_back_removal() {
        let f = fixture(10);
        f.store.fail_updates_for(AUTHOR);

        let outcomes = vote_round(&f, &juror_emails(5), &[VoteChoice::Inappropriate; 5]).await;

        assert!(matches!(outcomes[4], VoteOutcome::Removed { .. }));
        assert!(f.store.content(POST).is_none());
        // Jurors are still told
        assert_eq!(f.store.account("juror-0@example.com").notifications.len(), 1);

        let failures = f.logger.events_of("side_effect_failed");
        // strike, notification, post removal
        assert_eq!(failures.len(), 3);
        assert_eq!(failures[0].payload["update"]["kind"], "issueStrike");
        assert_eq!(failures[0].payload["account"], AUTHOR);
    }

    #[tokio::test]
    async fn test_repeat_revision_earns_strike() {
        let f = fixture(10);
        {
            let mut item = f.store.content(POST).unwrap();
            item.moderation_history
                .push(ModerationEntry::new(ModerationStatus::Appropriate, "older text"));
            f.store.add_content(item);
        }

        let outcomes = vote_round(&f, &juror_emails(5), &[VoteChoice::Revision; 5]).await;

        assert_eq!(
            outcomes[4],
            VoteOutcome::Resolved {
                status: ModerationStatus::Revision,
                strike: true,
            }
        );
        let author = f.store.account(AUTHOR);
        assert_eq!(author.strikes, 1);
        assert!(!author.locked);
        assert!(f.logger.event_types().contains(&"strike_issued"));
        assert!(!f.logger.event_types().contains(&"account_locked"));
    }

    #[tokio::test]
    async fn test_first_revision_is_not_struck() {
        let f = fixture(10);

        let outcomes = vote_round(&f, &juror_emails(5), &[VoteChoice::Revision; 5]).await;

        assert_eq!(
            outcomes[4],
            VoteOutcome::Resolved {
                status: ModerationStatus::Revision,
                strike: false,
            }
        );
        assert_eq!(f.store.account(AUTHOR).strikes, 0);
    }
}
