//! Shared utilities for use cases.
//!
//! Contains the optimistic-commit retry loop used by every use case that
//! writes a content item (CastVote, ReportContent, ReassignPanel).

use crate::ports::moderation_store::StoreError;
use jury_domain::ContentId;
use std::future::Future;
use tracing::{debug, warn};

/// Result of one read-compute-commit attempt.
pub(crate) enum Attempt<T> {
    /// The write went through (or no write was needed).
    Done(T),
    /// Another writer got there first; re-read and try again.
    Conflict,
}

/// Interpret a conditional write.
///
/// `Ok(true)` when it was applied, `Ok(false)` when it lost a race, and the
/// error for any other storage failure.
pub(crate) fn committed<T>(result: Result<T, StoreError>) -> Result<bool, StoreError> {
    match result {
        Ok(_) => Ok(true),
        Err(e) if e.is_conflict() => Ok(false),
        Err(e) => Err(e),
    }
}

/// Run `attempt` until it completes or `max_attempts` conflicts have occurred.
///
/// Returns `Ok(None)` when every attempt conflicted.
pub(crate) async fn retry_on_conflict<T, E, F, Fut>(
    max_attempts: u32,
    content_id: &ContentId,
    mut attempt: F,
) -> Result<Option<T>, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Attempt<T>, E>>,
{
    let max_attempts = max_attempts.max(1);
    for n in 1..=max_attempts {
        match attempt().await? {
            Attempt::Done(value) => return Ok(Some(value)),
            Attempt::Conflict => {
                debug!(
                    "Write conflict on {} (attempt {}/{})",
                    content_id, n, max_attempts
                );
            }
        }
    }
    warn!(
        "Giving up on {} after {} conflicting attempts",
        content_id, max_attempts
    );
    Ok(None)
}
