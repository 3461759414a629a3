//! Port for structured moderation audit logging.
//!
//! Defines the [`ModerationLogger`] trait for recording moderation events
//! (votes, revotes, removals, strikes, failed side effects) to a structured
//! log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures a
//! machine-readable audit trail (JSONL). `side_effect_failed` records carry
//! enough detail to replay the failed account update during reconciliation.

use serde_json::Value;

/// A structured moderation event for logging.
///
/// Each event has a type string and a JSON payload containing
/// event-specific fields. Adapters add the timestamp when writing.
#[derive(Debug, Clone)]
pub struct ModerationEvent {
    /// Event type identifier (e.g., "vote_recorded", "content_removed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ModerationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging moderation events to a structured log.
///
/// The `log` method is synchronous and non-fallible so that audit logging
/// never changes the outcome of a vote.
pub trait ModerationLogger: Send + Sync {
    /// Record a moderation event.
    fn log(&self, event: ModerationEvent);
}

/// No-op implementation for tests and when audit logging is disabled.
pub struct NoModerationLogger;

impl ModerationLogger for NoModerationLogger {
    fn log(&self, _event: ModerationEvent) {}
}
