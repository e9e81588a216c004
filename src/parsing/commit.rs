//! Strict completion check producing the committed address form.

use crate::models::{Address, AddressFamily};

/// Commit the text if it is a complete address for the family.
///
/// Incompleteness is not an error at this layer: text still being typed
/// returns `None` and the caller keeps displaying it. The strict grammars
/// are the `FromStr` impls on the address types, so "::"-compressed IPv6
/// text (which the permissive check lets through) never commits.
pub fn commit_if_complete(text: &str, family: AddressFamily) -> Option<Address> {
    match family {
        AddressFamily::V4 => text.parse().ok().map(Address::V4),
        AddressFamily::V6 => text.parse().ok().map(Address::V6),
    }
}
