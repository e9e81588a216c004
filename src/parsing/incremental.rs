//! Per-keystroke validation, tolerant of partial input.

use crate::error::ValidationError;
use crate::models::{parse_octet, AddressFamily};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Zero to eight colon separated fields, each empty or 1-4 hex
    // digits. Laxer than the committable grammar: it also matches
    // "::"-compressed text and lone separators mid-typing.
    static ref TYPING_IPV6: Regex =
        Regex::new(r"^[0-9A-Fa-f]{0,4}(:[0-9A-Fa-f]{0,4}){0,7}$").expect("Invalid Regex");
}

/// Validate text that may still be being typed.
///
/// Empty text and trailing separators pass; only input that could never
/// grow into a valid address of the family fails. Nothing is committed
/// here: on failure the engine keeps its previous text and address.
pub fn validate_incremental(text: &str, family: AddressFamily) -> Result<(), ValidationError> {
    match family {
        AddressFamily::V4 => validate_ipv4(text),
        AddressFamily::V6 => validate_ipv6(text),
    }
}

fn validate_ipv4(text: &str) -> Result<(), ValidationError> {
    let segments: Vec<&str> = text.split('.').collect();
    if segments.len() > 4 {
        return Err(ValidationError::format("IPv4 address has at most 4 octets"));
    }
    for segment in segments {
        // Empty segments are in-progress, not wrong.
        if !segment.is_empty() && parse_octet(segment).is_none() {
            return Err(ValidationError::format(format!(
                "Invalid IPv4 octet: {segment}"
            )));
        }
    }
    Ok(())
}

fn validate_ipv6(text: &str) -> Result<(), ValidationError> {
    if TYPING_IPV6.is_match(text) {
        Ok(())
    } else {
        Err(ValidationError::format(format!(
            "Invalid IPv6 address: {text}"
        )))
    }
}
