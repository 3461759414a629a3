//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`ModerationConfig`]: panel size, report threshold, commit retries and
//!   vote admission rules

pub mod moderation_config;

pub use moderation_config::ModerationConfig;
