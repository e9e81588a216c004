//! Terminal output utilities.
//!
//! Provides formatting helpers for terminal output.

/// Format a value as a left-aligned, fixed-width field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// The value padded with spaces on the right
pub fn pad_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    if value_str.len() >= width {
        value_str
    } else {
        format!("{value_str:<width$}")
    }
}
