//! Vote types for jury moderation
//!
//! This module defines the voting primitives a juror submits for a content item.

use crate::core::error::DomainError;
use crate::core::time::current_timestamp;
use serde::{Deserialize, Serialize};

/// The verdict a juror can cast on a piece of content
///
/// Stored records may contain categories this engine does not know about
/// (for instance written by an older client). They deserialize as
/// [`VoteChoice::Unrecognized`] and are ignored by the tally.
///
/// # Example
///
/// ```
/// use jury_domain::moderation::VoteChoice;
///
/// let choice: VoteChoice = "revision".parse().unwrap();
/// assert_eq!(choice, VoteChoice::Revision);
/// assert!("spam".parse::<VoteChoice>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VoteChoice {
    /// Content is fine as it is
    Appropriate,
    /// Content needs to be revised by its author
    Revision,
    /// Content must be removed
    Inappropriate,
    /// A category this engine does not count
    #[serde(other)]
    Unrecognized,
}

impl VoteChoice {
    /// The three categories counted by a tally, in tally order
    pub const COUNTED: [VoteChoice; 3] = [
        VoteChoice::Appropriate,
        VoteChoice::Revision,
        VoteChoice::Inappropriate,
    ];

    /// Whether this choice is one of the counted categories
    pub fn is_counted(&self) -> bool {
        !matches!(self, VoteChoice::Unrecognized)
    }

    /// Stable lowercase name, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteChoice::Appropriate => "appropriate",
            VoteChoice::Revision => "revision",
            VoteChoice::Inappropriate => "inappropriate",
            VoteChoice::Unrecognized => "unrecognized",
        }
    }
}

impl std::fmt::Display for VoteChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for VoteChoice {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "appropriate" | "approve" | "ok" => Ok(VoteChoice::Appropriate),
            "revision" | "revise" => Ok(VoteChoice::Revision),
            "inappropriate" | "remove" => Ok(VoteChoice::Inappropriate),
            other => Err(DomainError::UnknownChoice(other.to_string())),
        }
    }
}

/// A single vote from a juror on one content item
///
/// The choice is stored under the `vote` key to stay compatible with
/// existing records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vote {
    /// Juror account identifier (email)
    pub juror: String,
    /// The verdict
    #[serde(rename = "vote")]
    pub choice: VoteChoice,
    /// When the vote was cast (milliseconds since epoch)
    pub timestamp: u64,
}

impl Vote {
    /// Create a vote stamped with the current time
    pub fn new(juror: impl Into<String>, choice: VoteChoice) -> Self {
        Self::at(juror, choice, current_timestamp())
    }

    /// Create a vote with an explicit timestamp
    pub fn at(juror: impl Into<String>, choice: VoteChoice, timestamp: u64) -> Self {
        Self {
            juror: juror.into(),
            choice,
            timestamp,
        }
    }
}
