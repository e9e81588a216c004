//! IPv4 address and subnet derivation utilities.
//!
//! Provides the [`Ipv4Address`] octet type along with the calculator
//! functions that derive mask, network, broadcast, usable range, host
//! count, class and privacy for an address and prefix length.

use crate::error::ValidationError;
use itertools::Itertools;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Maximum prefix length for an IPv4 subnet (32 bits).
pub const MAX_PREFIX: u8 = 32;

/// Prefix length the calculator falls back to for this family.
pub const DEFAULT_PREFIX: u8 = 24;

/// Derive the subnet mask for a prefix length as 4 octets.
///
/// The first `prefix / 8` octets are 255; the next octet (when the prefix
/// does not land on an octet boundary) is `256 - 2^(8 - prefix % 8)`; the
/// rest are 0.
///
/// # Examples
/// ```
/// use cidr_calc::models::{subnet_mask, Ipv4Address};
/// assert_eq!(subnet_mask(24).unwrap(), Ipv4Address::from([255, 255, 255, 0]));
/// ```
pub fn subnet_mask(prefix: u8) -> Result<Ipv4Address, Box<dyn Error>> {
    if prefix > MAX_PREFIX {
        return Err("Prefix length is too long".into());
    }
    let full_octets = (prefix / 8) as usize;
    let remainder = prefix % 8;
    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        if i < full_octets {
            *octet = 255;
        } else if i == full_octets && remainder > 0 {
            *octet = (256u16 - (1u16 << (8 - remainder))) as u8;
        }
    }
    Ok(Ipv4Address { octets })
}

/// Derive the wildcard mask, octet-wise `255 - mask`.
pub fn wildcard_mask(prefix: u8) -> Result<Ipv4Address, Box<dyn Error>> {
    let mask = subnet_mask(prefix)?;
    Ok(Ipv4Address {
        octets: mask.octets.map(|octet| 255 - octet),
    })
}

/// Derive the network address, octet-wise `address AND mask`.
pub fn network_address(addr: &Ipv4Address, prefix: u8) -> Result<Ipv4Address, Box<dyn Error>> {
    let mask = subnet_mask(prefix)?;
    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        *octet = addr.octets[i] & mask.octets[i];
    }
    Ok(Ipv4Address { octets })
}

/// Derive the broadcast address, octet-wise `address OR (255 - mask)`.
pub fn broadcast_address(addr: &Ipv4Address, prefix: u8) -> Result<Ipv4Address, Box<dyn Error>> {
    let mask = subnet_mask(prefix)?;
    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        *octet = addr.octets[i] | (255 - mask.octets[i]);
    }
    Ok(Ipv4Address { octets })
}

/// Count the usable hosts in a subnet: `2^(32 - prefix) - 2`.
///
/// The network+broadcast deduction is applied without clamping, so a /31
/// yields 0 and a /32 yields -1. Callers display the value as is.
pub fn available_hosts(prefix: u8) -> Result<i64, Box<dyn Error>> {
    if prefix > MAX_PREFIX {
        return Err("Prefix length is too long".into());
    }
    Ok((1i64 << (32 - prefix)) - 2)
}

/// Derive the first and last usable host addresses.
///
/// First usable is the network address with the last octet +1; last
/// usable is the broadcast address with the last octet -1. The adjustment
/// is octet-local: no carry into the third octet and no clamping, so a
/// /32 produces endpoints one past the octet range, kept verbatim in the
/// widened [`HostBound`] form.
pub fn usable_range(
    addr: &Ipv4Address,
    prefix: u8,
) -> Result<(HostBound, HostBound), Box<dyn Error>> {
    let network = network_address(addr, prefix)?;
    let broadcast = broadcast_address(addr, prefix)?;
    let mut first = network.octets.map(i16::from);
    let mut last = broadcast.octets.map(i16::from);
    first[3] += 1;
    last[3] -= 1;
    Ok((HostBound { octets: first }, HostBound { octets: last }))
}

/// Render an address as four 8-bit zero-padded binary octets joined by `.`.
pub fn binary_octets(addr: &Ipv4Address) -> String {
    addr.octets
        .iter()
        .map(|octet| format!("{octet:08b}"))
        .join(".")
}

/// IPv4 address as 4 ordered octets.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Ipv4Address {
    /// The octets, most significant first.
    pub octets: [u8; 4],
}

impl Ipv4Address {
    /// Classify the address by its first octet.
    pub fn class(&self) -> IpClass {
        match self.octets[0] {
            1..=126 => IpClass::A,
            128..=191 => IpClass::B,
            192..=223 => IpClass::C,
            224..=239 => IpClass::D,
            240..=255 => IpClass::E,
            // 0 and 127 match no class range.
            _ => IpClass::Invalid,
        }
    }

    /// True for the RFC 1918 ranges 10/8, 172.16/12 and 192.168/16.
    pub fn is_private(&self) -> bool {
        match self.octets {
            [10, ..] => true,
            [172, second, ..] if (16..=31).contains(&second) => true,
            [192, 168, ..] => true,
            _ => false,
        }
    }
}

/// Parse one dotted-quad segment as an octet.
///
/// Integer semantics rather than address semantics: leading zeros and a
/// leading `+` pass the way an integer parse accepts them; anything
/// non-numeric or outside 0..=255 does not.
pub(crate) fn parse_octet(segment: &str) -> Option<u8> {
    let value: u32 = segment.parse().ok()?;
    u8::try_from(value).ok()
}

impl FromStr for Ipv4Address {
    type Err = ValidationError;

    /// Strict complete-address parse: exactly 4 non-empty segments, each
    /// an integer in 0..=255.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = s.split('.').collect();
        if segments.len() != 4 {
            return Err(ValidationError::format(format!(
                "Invalid IPv4 address: {s}"
            )));
        }
        let mut octets = [0u8; 4];
        for (octet, segment) in octets.iter_mut().zip(&segments) {
            *octet = parse_octet(segment)
                .ok_or_else(|| ValidationError::format(format!("Invalid IPv4 octet: {segment}")))?;
        }
        Ok(Ipv4Address { octets })
    }
}

impl From<[u8; 4]> for Ipv4Address {
    fn from(octets: [u8; 4]) -> Self {
        Ipv4Address { octets }
    }
}

impl fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.octets[0], self.octets[1], self.octets[2], self.octets[3]
        )
    }
}

impl Serialize for Ipv4Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv4Address {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|e: ValidationError| de::Error::custom(e.to_string()))
    }
}

/// IPv4 address class derived from the first octet.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IpClass {
    A,
    B,
    C,
    /// Multicast range.
    D,
    /// Reserved range.
    E,
    /// First octet 0 or 127, outside every class range.
    Invalid,
}

impl fmt::Display for IpClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            IpClass::A => "A",
            IpClass::B => "B",
            IpClass::C => "C",
            IpClass::D => "D (Multicast)",
            IpClass::E => "E (Reserved)",
            IpClass::Invalid => "Invalid",
        };
        write!(f, "{label}")
    }
}

impl Serialize for IpClass {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// One endpoint of the usable host range.
///
/// Octets are widened to `i16` because the /31 and /32 endpoint
/// arithmetic runs past the octet range (-1 or 256 in the last octet) and
/// the result is displayed verbatim instead of being clamped.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HostBound {
    pub octets: [i16; 4],
}

impl fmt::Display for HostBound {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.octets[0], self.octets[1], self.octets[2], self.octets[3]
        )
    }
}

impl Serialize for HostBound {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subnet_mask() {
        assert_eq!(subnet_mask(0).unwrap(), Ipv4Address::from([0, 0, 0, 0]));
        assert_eq!(subnet_mask(8).unwrap(), Ipv4Address::from([255, 0, 0, 0]));
        assert_eq!(
            subnet_mask(20).unwrap(),
            Ipv4Address::from([255, 255, 240, 0])
        );
        assert_eq!(
            subnet_mask(24).unwrap(),
            Ipv4Address::from([255, 255, 255, 0])
        );
        assert_eq!(
            subnet_mask(25).unwrap(),
            Ipv4Address::from([255, 255, 255, 128])
        );
        assert_eq!(
            subnet_mask(31).unwrap(),
            Ipv4Address::from([255, 255, 255, 254])
        );
        assert_eq!(
            subnet_mask(32).unwrap(),
            Ipv4Address::from([255, 255, 255, 255])
        );
        assert!(subnet_mask(33).is_err());
    }

    #[test]
    fn test_wildcard_mask() {
        assert_eq!(
            wildcard_mask(24).unwrap(),
            Ipv4Address::from([0, 0, 0, 255])
        );
        assert_eq!(
            wildcard_mask(20).unwrap(),
            Ipv4Address::from([0, 0, 15, 255])
        );
        assert_eq!(
            wildcard_mask(0).unwrap(),
            Ipv4Address::from([255, 255, 255, 255])
        );
        assert!(wildcard_mask(33).is_err());
    }

    #[test]
    fn test_network_address() {
        let ip = Ipv4Address::from([192, 168, 1, 42]);
        assert_eq!(
            network_address(&ip, 24).unwrap(),
            Ipv4Address::from([192, 168, 1, 0])
        );
        assert_eq!(
            network_address(&ip, 16).unwrap(),
            Ipv4Address::from([192, 168, 0, 0])
        );
        assert_eq!(
            network_address(&ip, 32).unwrap(),
            Ipv4Address::from([192, 168, 1, 42])
        );
        assert_eq!(
            network_address(&Ipv4Address::from([10, 0, 0, 5]), 8).unwrap(),
            Ipv4Address::from([10, 0, 0, 0])
        );
        assert!(network_address(&ip, 33).is_err());
    }

    #[test]
    fn test_broadcast_address() {
        let ip = Ipv4Address::from([192, 168, 1, 42]);
        assert_eq!(
            broadcast_address(&ip, 24).unwrap(),
            Ipv4Address::from([192, 168, 1, 255])
        );
        assert_eq!(
            broadcast_address(&ip, 16).unwrap(),
            Ipv4Address::from([192, 168, 255, 255])
        );
        assert_eq!(
            broadcast_address(&Ipv4Address::from([10, 0, 0, 5]), 8).unwrap(),
            Ipv4Address::from([10, 255, 255, 255])
        );
        // At /32 the broadcast is the address itself.
        assert_eq!(broadcast_address(&ip, 32).unwrap(), ip);
        assert!(broadcast_address(&ip, 33).is_err());
    }

    #[test]
    fn test_mask_bit_coverage() {
        // Network keeps no bits outside the mask and broadcast sets every
        // host bit, for every prefix.
        let samples = [
            Ipv4Address::from([192, 168, 1, 42]),
            Ipv4Address::from([10, 0, 0, 5]),
            Ipv4Address::from([172, 16, 254, 1]),
            Ipv4Address::from([255, 255, 255, 255]),
            Ipv4Address::from([0, 0, 0, 0]),
        ];
        for addr in samples {
            for prefix in 0..=MAX_PREFIX {
                let mask = subnet_mask(prefix).unwrap();
                let network = network_address(&addr, prefix).unwrap();
                let broadcast = broadcast_address(&addr, prefix).unwrap();
                for i in 0..4 {
                    assert_eq!(
                        network.octets[i] & !mask.octets[i],
                        0,
                        "network bits outside mask for {addr}/{prefix}"
                    );
                    assert_eq!(
                        broadcast.octets[i] | mask.octets[i],
                        255,
                        "host bit unset in broadcast for {addr}/{prefix}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_available_hosts() {
        assert_eq!(available_hosts(0).unwrap(), 4_294_967_294);
        assert_eq!(available_hosts(8).unwrap(), 16_777_214);
        assert_eq!(available_hosts(24).unwrap(), 254);
        assert_eq!(available_hosts(30).unwrap(), 2);
        // No clamping at the short-subnet end.
        assert_eq!(available_hosts(31).unwrap(), 0);
        assert_eq!(available_hosts(32).unwrap(), -1);
        assert!(available_hosts(33).is_err());
    }

    #[test]
    fn test_usable_range() {
        let ip = Ipv4Address::from([192, 168, 1, 1]);
        let (first, last) = usable_range(&ip, 24).unwrap();
        assert_eq!(first.to_string(), "192.168.1.1");
        assert_eq!(last.to_string(), "192.168.1.254");

        let (first, last) = usable_range(&Ipv4Address::from([10, 0, 0, 5]), 8).unwrap();
        assert_eq!(first.to_string(), "10.0.0.1");
        assert_eq!(last.to_string(), "10.255.255.254");
    }

    #[test]
    fn test_usable_range_short_subnets() {
        // /31: the endpoints cross over, no clamping applied.
        let (first, last) = usable_range(&Ipv4Address::from([192, 168, 1, 0]), 31).unwrap();
        assert_eq!(first.to_string(), "192.168.1.1");
        assert_eq!(last.to_string(), "192.168.1.0");

        // /32: one past the octet range on both sides.
        let (first, last) = usable_range(&Ipv4Address::from([203, 0, 113, 0]), 32).unwrap();
        assert_eq!(first.to_string(), "203.0.113.1");
        assert_eq!(last.to_string(), "203.0.113.-1");

        let (first, last) = usable_range(&Ipv4Address::from([203, 0, 113, 255]), 32).unwrap();
        assert_eq!(first.to_string(), "203.0.113.256");
        assert_eq!(last.to_string(), "203.0.113.254");
    }

    #[test]
    fn test_binary_octets() {
        assert_eq!(
            binary_octets(&Ipv4Address::from([192, 168, 1, 1])),
            "11000000.10101000.00000001.00000001"
        );
        assert_eq!(
            binary_octets(&Ipv4Address::from([255, 255, 255, 0])),
            "11111111.11111111.11111111.00000000"
        );
        assert_eq!(
            binary_octets(&Ipv4Address::from([0, 0, 0, 0])),
            "00000000.00000000.00000000.00000000"
        );
    }

    #[test]
    fn test_ip_class() {
        assert_eq!(Ipv4Address::from([1, 0, 0, 1]).class(), IpClass::A);
        assert_eq!(Ipv4Address::from([126, 255, 0, 1]).class(), IpClass::A);
        assert_eq!(Ipv4Address::from([128, 0, 0, 1]).class(), IpClass::B);
        assert_eq!(Ipv4Address::from([191, 255, 0, 1]).class(), IpClass::B);
        assert_eq!(Ipv4Address::from([192, 168, 1, 1]).class(), IpClass::C);
        assert_eq!(Ipv4Address::from([223, 0, 0, 1]).class(), IpClass::C);
        assert_eq!(Ipv4Address::from([224, 0, 0, 1]).class(), IpClass::D);
        assert_eq!(Ipv4Address::from([239, 0, 0, 1]).class(), IpClass::D);
        assert_eq!(Ipv4Address::from([240, 0, 0, 1]).class(), IpClass::E);
        assert_eq!(Ipv4Address::from([255, 0, 0, 1]).class(), IpClass::E);
        // 0 and 127 fall outside every class range.
        assert_eq!(Ipv4Address::from([0, 1, 2, 3]).class(), IpClass::Invalid);
        assert_eq!(Ipv4Address::from([127, 0, 0, 1]).class(), IpClass::Invalid);
    }

    #[test]
    fn test_ip_class_display() {
        assert_eq!(IpClass::C.to_string(), "C");
        assert_eq!(IpClass::D.to_string(), "D (Multicast)");
        assert_eq!(IpClass::E.to_string(), "E (Reserved)");
        assert_eq!(IpClass::Invalid.to_string(), "Invalid");
    }

    #[test]
    fn test_is_private() {
        assert!(Ipv4Address::from([10, 0, 0, 5]).is_private());
        assert!(Ipv4Address::from([10, 255, 255, 255]).is_private());
        assert!(Ipv4Address::from([172, 16, 0, 1]).is_private());
        assert!(Ipv4Address::from([172, 31, 255, 1]).is_private());
        assert!(Ipv4Address::from([192, 168, 1, 1]).is_private());

        assert!(!Ipv4Address::from([172, 15, 0, 1]).is_private());
        assert!(!Ipv4Address::from([172, 32, 0, 1]).is_private());
        assert!(!Ipv4Address::from([192, 169, 0, 1]).is_private());
        assert!(!Ipv4Address::from([8, 8, 8, 8]).is_private());
        assert!(!Ipv4Address::from([11, 0, 0, 1]).is_private());
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "192.168.1.1".parse::<Ipv4Address>().unwrap(),
            Ipv4Address::from([192, 168, 1, 1])
        );
        assert_eq!(
            "0.0.0.0".parse::<Ipv4Address>().unwrap(),
            Ipv4Address::from([0, 0, 0, 0])
        );
        // Integer-parse semantics accept leading zeros.
        assert_eq!(
            "010.008.8.8".parse::<Ipv4Address>().unwrap(),
            Ipv4Address::from([10, 8, 8, 8])
        );

        assert!("".parse::<Ipv4Address>().is_err());
        assert!("192.168.1".parse::<Ipv4Address>().is_err());
        assert!("192.168.1.".parse::<Ipv4Address>().is_err());
        assert!("1.2.3.4.5".parse::<Ipv4Address>().is_err());
        assert!("999.1.1.1".parse::<Ipv4Address>().is_err());
        assert!("a.b.c.d".parse::<Ipv4Address>().is_err());
        assert!("1.2.3.-4".parse::<Ipv4Address>().is_err());
    }

    #[test]
    fn test_serde_string_form() {
        let ip = Ipv4Address::from([192, 168, 1, 1]);
        let json = serde_json::to_string(&ip).unwrap();
        assert_eq!(json, "\"192.168.1.1\"");

        let back: Ipv4Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ip);

        assert!(serde_json::from_str::<Ipv4Address>("\"999.1.1.1\"").is_err());
    }
}
