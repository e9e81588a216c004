//! Address family flag and the committed-address union.

use super::{ipv4, ipv6, Ipv4Address, Ipv6Address};
use std::fmt;

/// The two address families the calculator understands.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AddressFamily {
    V4,
    V6,
}

impl AddressFamily {
    /// Largest valid prefix length for the family.
    pub fn max_prefix(&self) -> u8 {
        match self {
            AddressFamily::V4 => ipv4::MAX_PREFIX,
            AddressFamily::V6 => ipv6::MAX_PREFIX,
        }
    }

    /// Prefix length the calculator falls back to on entering the family.
    pub fn default_prefix(&self) -> u8 {
        match self {
            AddressFamily::V4 => ipv4::DEFAULT_PREFIX,
            AddressFamily::V6 => ipv6::DEFAULT_PREFIX,
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AddressFamily::V4 => write!(f, "IPv4"),
            AddressFamily::V6 => write!(f, "IPv6"),
        }
    }
}

/// A committed address of either family.
///
/// The tagged form keeps the payloads apart: an IPv4 record never carries
/// IPv6 text and vice versa.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Address {
    V4(Ipv4Address),
    V6(Ipv6Address),
}

impl Address {
    /// Family of the committed payload.
    pub fn family(&self) -> AddressFamily {
        match self {
            Address::V4(_) => AddressFamily::V4,
            Address::V6(_) => AddressFamily::V6,
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Address::V4(addr) => write!(f, "{addr}"),
            Address::V6(addr) => write!(f, "{addr}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_bounds() {
        assert_eq!(AddressFamily::V4.max_prefix(), 32);
        assert_eq!(AddressFamily::V6.max_prefix(), 128);
        assert_eq!(AddressFamily::V4.default_prefix(), 24);
        assert_eq!(AddressFamily::V6.default_prefix(), 64);
    }

    #[test]
    fn test_family_display() {
        assert_eq!(AddressFamily::V4.to_string(), "IPv4");
        assert_eq!(AddressFamily::V6.to_string(), "IPv6");
    }

    #[test]
    fn test_address_union() {
        let v4 = Address::V4(Ipv4Address::from([192, 168, 1, 1]));
        assert_eq!(v4.family(), AddressFamily::V4);
        assert_eq!(v4.to_string(), "192.168.1.1");

        let v6 = Address::V6("fd00:0:0:0:0:0:0:1".parse().unwrap());
        assert_eq!(v6.family(), AddressFamily::V6);
        assert_eq!(v6.to_string(), "fd00:0:0:0:0:0:0:1");
    }
}
