//! User accounts: jurors, authors, strikes and notifications.

pub mod entities;

pub use entities::{Account, AccountUpdate, Notification, STRIKE_LOCK_THRESHOLD};
