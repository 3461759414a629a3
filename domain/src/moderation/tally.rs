//! Vote counting

use super::vote::{Vote, VoteChoice};
use serde::{Deserialize, Serialize};

/// Counts of votes per counted category
///
/// A tally is a pure fold over a vote sequence: adding one vote increments
/// exactly one category (or none, for an unrecognized choice).
///
/// # Example
///
/// ```
/// use jury_domain::moderation::{Vote, VoteChoice, VoteTally};
///
/// let votes = vec![
///     Vote::at("a", VoteChoice::Appropriate, 0),
///     Vote::at("b", VoteChoice::Revision, 0),
///     Vote::at("c", VoteChoice::Appropriate, 0),
/// ];
/// let tally = VoteTally::from_votes(&votes);
/// assert_eq!(tally.appropriate, 2);
/// assert_eq!(tally.leaders(), vec![VoteChoice::Appropriate]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    pub appropriate: usize,
    pub revision: usize,
    pub inappropriate: usize,
}

impl VoteTally {
    /// Tally a sequence of votes
    pub fn from_votes<'a>(votes: impl IntoIterator<Item = &'a Vote>) -> Self {
        votes.into_iter().fold(Self::default(), |mut tally, vote| {
            tally.record(vote.choice);
            tally
        })
    }

    /// Count one more vote for `choice`; unrecognized choices are ignored
    pub fn record(&mut self, choice: VoteChoice) {
        match choice {
            VoteChoice::Appropriate => self.appropriate += 1,
            VoteChoice::Revision => self.revision += 1,
            VoteChoice::Inappropriate => self.inappropriate += 1,
            VoteChoice::Unrecognized => {}
        }
    }

    /// Number of votes for a category
    pub fn count(&self, choice: VoteChoice) -> usize {
        match choice {
            VoteChoice::Appropriate => self.appropriate,
            VoteChoice::Revision => self.revision,
            VoteChoice::Inappropriate => self.inappropriate,
            VoteChoice::Unrecognized => 0,
        }
    }

    /// Total counted votes
    pub fn total(&self) -> usize {
        self.appropriate + self.revision + self.inappropriate
    }

    /// Highest count among the three categories
    pub fn max(&self) -> usize {
        self.appropriate.max(self.revision).max(self.inappropriate)
    }

    /// Categories sharing the highest count, in tally order
    ///
    /// More than one entry means the round is tied.
    pub fn leaders(&self) -> Vec<VoteChoice> {
        let max = self.max();
        VoteChoice::COUNTED
            .into_iter()
            .filter(|choice| self.count(*choice) == max)
            .collect()
    }

    /// Whether two or more categories share the maximum
    pub fn is_tied(&self) -> bool {
        self.leaders().len() > 1
    }

    /// Compact summary, e.g. `A3 R2 I0`
    pub fn summary(&self) -> String {
        format!(
            "A{} R{} I{}",
            self.appropriate, self.revision, self.inappropriate
        )
    }
}
