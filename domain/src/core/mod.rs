//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: domain-level errors
//! - [`time::current_timestamp`]: millisecond clock used for votes and audit entries

pub mod error;
pub mod time;
