//! Juror selection
//!
//! Draws moderation panels from the account directory.

use crate::ports::moderation_store::{AccountFilter, ModerationStore, StoreError};
use jury_domain::{draw_panel, eligible_jurors};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

/// Draws odd-sized juror panels
///
/// Scans the directory for juror accounts, drops excluded and locked ones,
/// shuffles the rest and seats the first `requested` (rounded down to odd).
/// Selection only reads the directory, so it may run outside a content
/// item's commit.
pub struct JurorSelector<S: ModerationStore + 'static> {
    store: Arc<S>,
    rng: Mutex<StdRng>,
}

impl<S: ModerationStore + 'static> JurorSelector<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Selector with a fixed shuffle sequence, for reproducible draws
    pub fn with_seed(store: Arc<S>, seed: u64) -> Self {
        Self {
            store,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Select up to `requested` jurors, never anyone in `excluded`
    ///
    /// Returns an empty panel when nobody is eligible; the caller decides
    /// how to handle the stall.
    pub async fn select_jurors(
        &self,
        requested: usize,
        excluded: &[String],
    ) -> Result<Vec<String>, StoreError> {
        let accounts = self.store.list_accounts(AccountFilter::Jurors).await?;
        let candidates = eligible_jurors(&accounts, excluded);
        let pool = candidates.len();

        let panel = {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            draw_panel(candidates, requested, &mut *rng)
        };

        debug!(
            "Drew {} of {} requested jurors from a pool of {} ({} excluded)",
            panel.len(),
            requested,
            pool,
            excluded.len()
        );
        Ok(panel)
    }
}
