//! Moderation voting domain
//!
//! This module contains the pure decision logic of a jury round.
//!
//! # Core Concepts
//!
//! ## Tally
//! Votes are counted into three fixed categories. Anything else a juror may
//! have submitted is ignored rather than rejected.
//!
//! ## Outcome
//! A round resolves once every seat on the panel has voted. The category
//! holding the unique maximum wins; a shared maximum sends the item to a
//! revote with a fresh panel.
//!
//! # State Machine
//!
//! ```text
//! ┌─────────────┐  tie on a complete round   ┌──────────┐
//! │ underReview │ ─────────────────────────▶ │  revote  │
//! └─────────────┘ ◀───────────────────────── └──────────┘
//!        │          new panel, votes cleared
//!        │ unique maximum, round complete
//!        ▼
//! ┌─────────────┬──────────────┬─────────────────────────┐
//! │ appropriate │   revision   │ inappropriate → deleted │
//! │ flags reset │   hidden     │ removed, author struck  │
//! └─────────────┴──────────────┴─────────────────────────┘
//! ```

pub mod history;
pub mod outcome;
pub mod strike;
pub mod tally;
pub mod vote;

// Re-export main types
pub use history::ModerationEntry;
pub use outcome::{DEFAULT_PANEL_SIZE, ModerationStatus, resolve_outcome};
pub use strike::warrants_strike;
pub use tally::VoteTally;
pub use vote::{Vote, VoteChoice};
