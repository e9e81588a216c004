//! Output formatting for derived views.
//!
//! This module handles rendering the calculator's results:
//! - [`report`] - colored field report to the terminal
//! - [`terminal`] - fixed-width field helpers

mod report;
mod terminal;

pub use report::print_report;
pub use terminal::pad_field;
