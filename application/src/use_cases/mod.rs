//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod cast_vote;
pub mod reassign_panel;
pub mod report_content;
pub mod review_queue;
pub mod select_jurors;
pub(crate) mod shared;
pub mod submit_content;

#[cfg(test)]
pub(crate) mod test_support;
