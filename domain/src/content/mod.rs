//! Content items under moderation.

pub mod entities;

pub use entities::{ContentId, ContentItem};
