//! IPv6 address utilities, reduced form.
//!
//! IPv6 support is narrower than IPv4: addresses stay in their committed
//! text form, host counting works from the prefix alone, and the privacy
//! check is a unique-local heuristic over the leading characters of the
//! text.

use crate::error::ValidationError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Maximum prefix length for an IPv6 subnet (128 bits).
pub const MAX_PREFIX: u8 = 128;

/// Prefix length the calculator falls back to for this family.
pub const DEFAULT_PREFIX: u8 = 64;

/// 2^128 in decimal, one step past `u128::MAX`. Needed for prefix 0.
const FULL_RANGE_HOSTS: &str = "340282366920938463463374607431768211456";

lazy_static! {
    // Exactly 8 colon separated groups of 1-4 hex digits. "::"
    // compression never matches this form.
    static ref FULL_FORM: Regex =
        Regex::new(r"^[0-9A-Fa-f]{1,4}(:[0-9A-Fa-f]{1,4}){7}$").expect("Invalid Regex");
}

/// Count the addresses in a subnet as decimal text: `2^(128 - prefix)`.
///
/// No network or broadcast deduction applies to IPv6. Prefix 0 covers the
/// full range, whose count does not fit `u128`.
pub fn available_hosts(prefix: u8) -> Result<String, Box<dyn Error>> {
    if prefix > MAX_PREFIX {
        return Err("Prefix length is too long".into());
    }
    if prefix == 0 {
        return Ok(FULL_RANGE_HOSTS.to_string());
    }
    Ok((1u128 << (MAX_PREFIX - prefix)).to_string())
}

/// Unique-local heuristic: text beginning `fc00` or `fd00`, any case.
///
/// Only the literal text is inspected. An address such as fc01:... sits
/// inside fc00::/7 but does not satisfy the check.
pub fn is_unique_local(text: &str) -> bool {
    let folded = text.to_lowercase();
    folded.starts_with("fc00") || folded.starts_with("fd00")
}

/// IPv6 address in its committed text form (8 full groups).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ipv6Address {
    text: String,
}

impl Ipv6Address {
    /// The address text exactly as committed.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Unique-local heuristic over this address's text.
    pub fn is_unique_local(&self) -> bool {
        is_unique_local(&self.text)
    }
}

impl FromStr for Ipv6Address {
    type Err = ValidationError;

    /// Strict complete-address parse: exactly 8 non-empty hex groups.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if FULL_FORM.is_match(s) {
            Ok(Ipv6Address {
                text: s.to_string(),
            })
        } else {
            Err(ValidationError::format(format!(
                "Invalid IPv6 address: {s}"
            )))
        }
    }
}

impl fmt::Display for Ipv6Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl Serialize for Ipv6Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for Ipv6Address {
    fn deserialize<D>(deserializer: D) -> Result<Ipv6Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|e: ValidationError| de::Error::custom(e.to_string()))
    }
}
