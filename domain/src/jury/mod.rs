//! Jury panels
//!
//! Pure panel-drawing rules. Loading the account directory is the job of
//! the application layer's `JurorSelector`; this module decides who of the
//! loaded accounts may sit and how many seats there are.

pub mod panel;

pub use panel::{draw_panel, eligible_jurors, odd_panel_size};
