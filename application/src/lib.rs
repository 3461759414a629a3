//! Application layer for crowd-jury
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ModerationConfig;
pub use ports::{
    moderation_logger::{ModerationEvent, ModerationLogger, NoModerationLogger},
    moderation_store::{
        AccountFilter, ContentFilter, ModerationStore, StoreError, StoredContent,
    },
};
pub use use_cases::cast_vote::{CastVoteError, CastVoteInput, ModerationCoordinator, VoteOutcome};
pub use use_cases::reassign_panel::{PanelOutcome, ReassignPanelError, ReassignPanelUseCase};
pub use use_cases::report_content::{
    ReportContentError, ReportContentInput, ReportContentUseCase, ReportOutcome,
};
pub use use_cases::review_queue::ReviewQueueUseCase;
pub use use_cases::select_jurors::JurorSelector;
pub use use_cases::submit_content::{SubmitContentError, SubmitContentInput, SubmitContentUseCase};
