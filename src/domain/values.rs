// Copyright (c) 2025 - Cowboy AI, Inc.
//! Network value objects with validation invariants

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Value object validation error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error("Invalid VLAN ID: {0} (must be 1-4094)")]
    InvalidVlanId(i64),

    #[error("Invalid MAC address format: {0}")]
    InvalidMacAddress(String),
}

/// VLAN ID value object
///
/// Represents a VLAN tag (IEEE 802.1Q) on a logical network.
/// Invariants:
/// - Valid VLAN ID range (1-4094)
/// - VLAN 0 and 4095 are reserved; an untagged network has no `VlanId` at all
///
/// # Examples
///
/// ```rust
/// use ovirt_client::domain::VlanId;
///
/// assert_eq!(VlanId::new(100).unwrap().value(), 100);
/// assert!(VlanId::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VlanId(u16);

impl VlanId {
    /// Minimum valid VLAN ID
    pub const MIN: u16 = 1;

    /// Maximum valid VLAN ID
    pub const MAX: u16 = 4094;

    /// Create a new VLAN ID with validation
    ///
    /// Accepts any integer so that values read from the wire are range
    /// checked before narrowing.
    pub fn new(id: impl Into<i64>) -> Result<Self, ValueError> {
        let id = id.into();
        if id < i64::from(Self::MIN) || id > i64::from(Self::MAX) {
            return Err(ValueError::InvalidVlanId(id));
        }

        Ok(Self(id as u16))
    }

    /// Get the VLAN ID value
    pub fn value(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for VlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u16> for VlanId {
    type Error = ValueError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// MAC address value object
///
/// Represents the 48-bit hardware address of a host NIC.
/// Invariants:
/// - Exactly 6 octets, given as 12 hex digits with optional `:` or `-` separators
/// - Canonical representation is lowercase and colon-separated
///
/// # Examples
///
/// ```rust
/// use ovirt_client::domain::MacAddress;
///
/// let mac = MacAddress::new("00-1A-4A-16-01-51").unwrap();
/// assert_eq!(mac.to_string(), "00:1a:4a:16:01:51");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    /// Create a new MAC address with validation.
    ///
    /// Accepts six two-digit hex groups separated by a single kind of
    /// separator (`:` or `-`), or twelve bare hex digits.
    pub fn new(mac: impl AsRef<str>) -> Result<Self, ValueError> {
        let mac = mac.as_ref();
        let invalid = || ValueError::InvalidMacAddress(mac.to_string());

        let groups: Vec<&str> = if mac.contains(':') {
            mac.split(':').collect()
        } else if mac.contains('-') {
            mac.split('-').collect()
        } else if mac.len() == 12 && mac.is_ascii() {
            (0..6).map(|i| &mac[i * 2..i * 2 + 2]).collect()
        } else {
            return Err(invalid());
        };

        if groups.len() != 6 {
            return Err(invalid());
        }

        let mut octets = [0u8; 6];
        for (octet, group) in octets.iter_mut().zip(&groups) {
            if group.len() != 2 || !group.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            *octet = u8::from_str_radix(group, 16).map_err(|_| invalid())?;
        }

        Ok(Self(octets))
    }

    pub const fn from_octets(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    /// Get the octets
    pub fn octets(&self) -> [u8; 6] {
        self.0
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}", a, b, c, d, e, g)
    }
}

impl FromStr for MacAddress {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for MacAddress {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MacAddress {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        MacAddress::new(&raw).map_err(serde::de::Error::custom)
    }
}
