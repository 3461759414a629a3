//! Panel drawing
//!
//! A panel always has an odd number of seats so a complete round between
//! two categories can never tie. When the pool is too small the panel
//! shrinks rather than growing past the pool.

use crate::account::Account;
use rand::Rng;
use rand::seq::SliceRandom;

/// Largest odd panel size that fits `requested` seats into a pool of `pool`
///
/// # Example
///
/// ```
/// use jury_domain::jury::odd_panel_size;
///
/// assert_eq!(odd_panel_size(5, 10), 5);
/// assert_eq!(odd_panel_size(5, 4), 3);
/// assert_eq!(odd_panel_size(6, 10), 5);
/// assert_eq!(odd_panel_size(5, 0), 0);
/// ```
pub fn odd_panel_size(requested: usize, pool: usize) -> usize {
    let clamped = requested.min(pool);
    if clamped % 2 == 0 {
        clamped.saturating_sub(1)
    } else {
        clamped
    }
}

/// Accounts that may be drawn onto a panel
///
/// Keeps juror-flagged, unlocked accounts whose email is not in `excluded`.
/// The result is deduplicated and keeps directory order.
pub fn eligible_jurors<'a>(
    accounts: impl IntoIterator<Item = &'a Account>,
    excluded: &[String],
) -> Vec<String> {
    let mut eligible: Vec<String> = Vec::new();
    for account in accounts {
        if !account.is_juror || account.locked {
            continue;
        }
        if excluded.iter().any(|e| e == &account.email) || eligible.contains(&account.email) {
            continue;
        }
        eligible.push(account.email.clone());
    }
    eligible
}

/// Draw an odd-sized panel from `candidates`
///
/// Candidates are shuffled with an unbiased Fisher–Yates permutation and the
/// first [`odd_panel_size`] of them are seated. An empty pool yields an empty
/// panel; the caller decides what a stalled round means.
pub fn draw_panel<R: Rng + ?Sized>(
    mut candidates: Vec<String>,
    requested: usize,
    rng: &mut R,
) -> Vec<String> {
    let seats = odd_panel_size(requested, candidates.len());
    candidates.shuffle(rng);
    candidates.truncate(seats);
    candidates
}
