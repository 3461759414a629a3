//! Logging infrastructure: structured moderation audit logging.
//!
//! Provides [`JsonlModerationLogger`], a JSONL file writer that implements
//! the [`ModerationLogger`](jury_application::ModerationLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlModerationLogger;
