//! Storage adapters for the [`ModerationStore`](jury_application::ModerationStore) port.
//!
//! - [`InMemoryModerationStore`]: process-local state, used directly in
//!   tests and as the working set of the file store
//! - [`JsonFileModerationStore`]: the same state persisted to one JSON file

mod json_file;
mod memory;

pub use json_file::JsonFileModerationStore;
pub use memory::{ContentRecord, InMemoryModerationStore, StoreSnapshot};
