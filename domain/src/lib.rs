//! Domain layer for crowd-jury
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Jury
//!
//! A jury is a small, odd-sized panel of accounts drawn at random to decide
//! what happens to a reported piece of content:
//!
//! - **Vote**: each juror picks `appropriate`, `revision` or `inappropriate`
//! - **Round**: a fixed panel votes until every seat has voted
//! - **Revote**: a tied round is re-polled with a fresh panel
//!
//! ## Consequences
//!
//! - `appropriate`: flags are cleared
//! - `revision`: content is hidden until the author revises it
//! - `inappropriate`: content is removed and the author receives a strike;
//!   three strikes lock the account

pub mod account;
pub mod config;
pub mod content;
pub mod core;
pub mod jury;
pub mod moderation;

// Re-export commonly used types
pub use account::{Account, AccountUpdate, Notification, STRIKE_LOCK_THRESHOLD};
pub use config::{ConfigIssue, ConfigIssueCode, Severity};
pub use content::{ContentId, ContentItem};
pub use core::{error::DomainError, time::current_timestamp};
pub use jury::{draw_panel, eligible_jurors, odd_panel_size};
pub use moderation::{
    DEFAULT_PANEL_SIZE, ModerationEntry, ModerationStatus, Vote, VoteChoice, VoteTally,
    resolve_outcome, warrants_strike,
};
