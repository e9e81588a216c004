//! Address text validation.
//!
//! This module keeps two distinct predicates per family:
//! - [`incremental`] - permissive per-keystroke validation
//! - [`commit`] - strict completion check producing the committed form

mod commit;
mod incremental;

// Re-export public functions
pub use commit::commit_if_complete;
pub use incremental::validate_incremental;
