//! Derived views of the committed state.
//!
//! Views are pure functions of (address, prefix) with no lifetime of
//! their own; the engine recomputes them on every read.

use super::{ipv4, ipv6, HostBound, IpClass, Ipv4Address, Ipv6Address};
use serde::Serialize;
use std::error::Error;

/// Everything the calculator derives for an IPv4 address and prefix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkView {
    /// The committed address the view was derived from.
    pub address: Ipv4Address,
    /// Prefix length in effect.
    pub prefix: u8,
    pub subnet_mask: Ipv4Address,
    pub wildcard_mask: Ipv4Address,
    pub network: Ipv4Address,
    pub broadcast: Ipv4Address,
    pub first_usable: HostBound,
    pub last_usable: HostBound,
    pub available_hosts: i64,
    pub class: IpClass,
    pub private: bool,
    /// Binary rendering of the address octets.
    pub binary: String,
}

impl NetworkView {
    /// Compute the full IPv4 view for an address and prefix.
    pub fn derive(addr: &Ipv4Address, prefix: u8) -> Result<NetworkView, Box<dyn Error>> {
        let (first_usable, last_usable) = ipv4::usable_range(addr, prefix)?;
        Ok(NetworkView {
            address: *addr,
            prefix,
            subnet_mask: ipv4::subnet_mask(prefix)?,
            wildcard_mask: ipv4::wildcard_mask(prefix)?,
            network: ipv4::network_address(addr, prefix)?,
            broadcast: ipv4::broadcast_address(addr, prefix)?,
            first_usable,
            last_usable,
            available_hosts: ipv4::available_hosts(prefix)?,
            class: addr.class(),
            private: addr.is_private(),
            binary: ipv4::binary_octets(addr),
        })
    }
}

/// The reduced IPv6 view: host count and the unique-local flag.
///
/// Mask, network, broadcast, usable range and class stay undefined for
/// this family and have no fields here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ipv6Summary {
    /// Committed address, if any has been committed for this family.
    pub address: Option<Ipv6Address>,
    /// Prefix length in effect.
    pub prefix: u8,
    /// Address count as decimal text (2^128 exceeds every integer type).
    pub available_hosts: String,
    pub unique_local: bool,
}

impl Ipv6Summary {
    /// Compute the reduced IPv6 view.
    ///
    /// The host count needs only the prefix; the unique-local flag stays
    /// false until an address is committed.
    pub fn derive(addr: Option<&Ipv6Address>, prefix: u8) -> Result<Ipv6Summary, Box<dyn Error>> {
        Ok(Ipv6Summary {
            address: addr.cloned(),
            prefix,
            available_hosts: ipv6::available_hosts(prefix)?,
            unique_local: addr.map(Ipv6Address::is_unique_local).unwrap_or(false),
        })
    }
}

/// Snapshot handed to display code, tagged by family.
///
/// Serialized untagged: the JSON object is the inner view directly, and
/// the family is implied by which fields are present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DerivedView {
    V4(NetworkView),
    V6(Ipv6Summary),
}
