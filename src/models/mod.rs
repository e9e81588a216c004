//! Domain models for the CIDR calculator.
//!
//! This module contains the core data structures used throughout the engine:
//! - [`Ipv4Address`] - IPv4 address as 4 octets, with the subnet math
//! - [`ipv6`] - reduced IPv6 support ([`Ipv6Address`], host count, unique-local)
//! - [`AddressFamily`] and [`Address`] - family flag and committed-address union
//! - [`NetworkView`], [`Ipv6Summary`], [`DerivedView`] - derived snapshots

mod family;
mod ipv4;
pub mod ipv6;
mod view;

// Re-export public types
pub use family::{Address, AddressFamily};
pub use ipv4::{
    available_hosts, binary_octets, broadcast_address, network_address, subnet_mask, usable_range,
    wildcard_mask, HostBound, IpClass, Ipv4Address,
};
pub use ipv6::Ipv6Address;
pub use view::{DerivedView, Ipv6Summary, NetworkView};

pub(crate) use ipv4::parse_octet;
