//! The NAT network configuration validator.
//!
//! [`validate_network`] turns the raw text of a network form into a typed
//! [`ValidatedNetworkConfig`], or reports every problem it can detect.
//!
//! # What makes a NAT network acceptable?
//!
//! ```text
//!   10.10.10.0        10.10.10.1   10.10.10.10 ........ 10.10.10.254   10.10.10.255
//!   network address   host IP      dhcp_start           dhcp_end       broadcast
//! ```
//!
//! 1. The CIDR parses as an IP network.
//! 2. The host IP and both DHCP bounds parse as IP addresses.
//! 3. The gateway interface is an integer in `1..=interface_count`.
//! 4. Both DHCP bounds lie inside the network.
//! 5. The DHCP end is strictly after the DHCP start.
//! 6. Neither DHCP bound is the network address, the broadcast address, or the
//!    host IP.  `/31` and `/32` blocks (`/127`, `/128` for IPv6) have no
//!    broadcast address.
//!
//! Checks that need a value which failed to parse are skipped; the parse
//! failure itself is already reported.
//!
//! # Address ordering
//!
//! Addresses compare as [`IpAddr`] values, i.e. by their integer value,
//! never by their text.  `10.10.10.9` is below `10.10.10.10` even though it
//! sorts after it as a string.  Every IPv4 address orders before every IPv6
//! address, and a network of one family never contains an address of the
//! other.

use std::net::IpAddr;

use ipnetwork::{IpNetwork, IpNetworkError};
use serde::{Deserialize, Serialize};

use super::errors::{Field, FieldErrors, ValidationError};

/// Maximum number of characters accepted in a text field.
pub const MAX_FIELD_LENGTH: usize = 255;

/// Raw form input, exactly as submitted.
///
/// Surrounding whitespace is ignored by the validator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateNetworkConfig {
    /// Human label of the network.
    pub network_name: String,
    /// Host bridge device label, e.g. `vibr1000`.
    pub bridge_name: String,
    /// Network in CIDR notation, e.g. `10.10.10.0/24`.
    pub cidr: String,
    /// Address the host holds inside the new network.
    pub host_ip: String,
    /// First address offered to DHCP clients (inclusive).
    pub dhcp_start: String,
    /// Last address offered to DHCP clients (inclusive).
    pub dhcp_end: String,
    /// OS index of the gateway interface, or the "none selected" value.
    pub interface: String,
}

impl CandidateNetworkConfig {
    /// Returns the raw text of `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::NetworkName => &self.network_name,
            Field::BridgeName => &self.bridge_name,
            Field::Cidr => &self.cidr,
            Field::HostIp => &self.host_ip,
            Field::DhcpStart => &self.dhcp_start,
            Field::DhcpEnd => &self.dhcp_end,
            Field::Interface => &self.interface,
        }
    }
}

/// A parsed IP network with its derived boundary addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NetworkRange {
    /// Address as written, host bits included (`10.10.10.10` in `10.10.10.10/24`).
    pub address: IpAddr,
    /// Prefix length.
    pub prefix: u8,
    /// Lowest address of the block.
    pub network: IpAddr,
    /// Highest address of the block.
    pub broadcast: IpAddr,
    #[serde(skip)]
    block: IpNetwork,
}

impl NetworkRange {
    /// Parses CIDR notation.
    ///
    /// An address without a prefix is a single-host network (`/32` or `/128`).
    ///
    /// # Errors
    ///
    /// Returns the [`IpNetworkError`] from `ipnetwork` when the address or the
    /// prefix length is malformed.
    pub fn parse(text: &str) -> Result<Self, IpNetworkError> {
        text.parse::<IpNetwork>().map(Self::from)
    }

    /// Returns `true` if `addr` lies in the block, bounds included.
    ///
    /// An address of the other family is never contained.
    pub fn contains(&self, addr: IpAddr) -> bool {
        match (self.block, addr) {
            (IpNetwork::V4(_), IpAddr::V4(_)) | (IpNetwork::V6(_), IpAddr::V6(_)) => {
                self.block.contains(addr)
            }
            _ => false,
        }
    }

    /// The broadcast address, if the block has one.
    ///
    /// Point-to-point and single-host blocks (`/31`, `/32`, `/127`, `/128`)
    /// have none.
    pub fn broadcast_address(&self) -> Option<IpAddr> {
        let host_bits = match self.block {
            IpNetwork::V4(_) => 32 - self.prefix,
            IpNetwork::V6(_) => 128 - self.prefix,
        };
        (host_bits > 1).then_some(self.broadcast)
    }
}

impl From<IpNetwork> for NetworkRange {
    fn from(block: IpNetwork) -> Self {
        Self {
            address: block.ip(),
            prefix: block.prefix(),
            network: block.network(),
            broadcast: block.broadcast(),
            block,
        }
    }
}

/// A network configuration that passed every check.
///
/// Only [`validate_network`] constructs this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedNetworkConfig {
    network_name: String,
    bridge_name: String,
    network: NetworkRange,
    host_ip: IpAddr,
    dhcp_start: IpAddr,
    dhcp_end: IpAddr,
    interface_index: u32,
}

impl ValidatedNetworkConfig {
    pub fn network_name(&self) -> &str {
        &self.network_name
    }

    pub fn bridge_name(&self) -> &str {
        &self.bridge_name
    }

    pub fn network(&self) -> &NetworkRange {
        &self.network
    }

    pub fn host_ip(&self) -> IpAddr {
        self.host_ip
    }

    pub fn dhcp_start(&self) -> IpAddr {
        self.dhcp_start
    }

    pub fn dhcp_end(&self) -> IpAddr {
        self.dhcp_end
    }

    /// OS index of the gateway interface, live at validation time.
    pub fn interface_index(&self) -> u32 {
        self.interface_index
    }
}

/// Validates a candidate network against the live interface count.
///
/// `interface_count` is the number of interfaces present on the host right
/// now; the caller must query it for every call.
///
/// # Errors
///
/// Returns [`FieldErrors`] holding every detected problem when any check
/// fails.  Malformed input never panics.
pub fn validate_network(
    candidate: &CandidateNetworkConfig,
    interface_count: usize,
) -> Result<ValidatedNetworkConfig, FieldErrors> {
    let mut errors = FieldErrors::new();

    let network_name = bounded(&candidate.network_name, Field::NetworkName, &mut errors);
    let bridge_name = bounded(&candidate.bridge_name, Field::BridgeName, &mut errors);

    let interface_index = required(&candidate.interface, Field::Interface, &mut errors)
        .and_then(|value| {
            let index = resolve_interface(value, interface_count);
            if index.is_none() {
                errors.add(Field::Interface, ValidationError::InvalidInterface);
            }
            index
        });

    let network = bounded(&candidate.cidr, Field::Cidr, &mut errors).and_then(|value| {
        match NetworkRange::parse(value) {
            Ok(range) => Some(range),
            Err(_) => {
                errors.add(Field::Cidr, ValidationError::InvalidNetworkFormat);
                None
            }
        }
    });

    let host_ip = bounded(&candidate.host_ip, Field::HostIp, &mut errors)
        .and_then(|value| parse_address(value, Field::HostIp, &mut errors));
    let dhcp_start = bounded(&candidate.dhcp_start, Field::DhcpStart, &mut errors)
        .and_then(|value| parse_address(value, Field::DhcpStart, &mut errors));
    let dhcp_end = bounded(&candidate.dhcp_end, Field::DhcpEnd, &mut errors)
        .and_then(|value| parse_address(value, Field::DhcpEnd, &mut errors));

    let bounds = [(Field::DhcpStart, dhcp_start), (Field::DhcpEnd, dhcp_end)];

    if let Some(range) = &network {
        for (field, bound) in bounds {
            if let Some(addr) = bound {
                if !range.contains(addr) {
                    errors.add(field, ValidationError::AddressOutOfNetwork);
                }
            }
        }
    }

    if let (Some(start), Some(end)) = (dhcp_start, dhcp_end) {
        if end <= start {
            errors.add(Field::DhcpEnd, ValidationError::InvalidRangeOrder);
        }
    }

    let reserved: Vec<IpAddr> = network
        .iter()
        .flat_map(|range| std::iter::once(range.network).chain(range.broadcast_address()))
        .chain(host_ip)
        .collect();
    for (field, bound) in bounds {
        if let Some(addr) = bound {
            if reserved.contains(&addr) {
                errors.add(field, ValidationError::ReservedAddressConflict);
            }
        }
    }

    match (
        network_name,
        bridge_name,
        network,
        host_ip,
        dhcp_start,
        dhcp_end,
        interface_index,
    ) {
        (
            Some(network_name),
            Some(bridge_name),
            Some(network),
            Some(host_ip),
            Some(dhcp_start),
            Some(dhcp_end),
            Some(interface_index),
        ) if errors.is_empty() => Ok(ValidatedNetworkConfig {
            network_name: network_name.to_string(),
            bridge_name: bridge_name.to_string(),
            network,
            host_ip,
            dhcp_start,
            dhcp_end,
            interface_index,
        }),
        _ => Err(errors),
    }
}

/// Trims `value`; records [`ValidationError::Required`] when nothing remains.
fn required<'a>(value: &'a str, field: Field, errors: &mut FieldErrors) -> Option<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        errors.add(field, ValidationError::Required);
        return None;
    }
    Some(value)
}

/// Like [`required`], additionally enforcing [`MAX_FIELD_LENGTH`] characters.
fn bounded<'a>(value: &'a str, field: Field, errors: &mut FieldErrors) -> Option<&'a str> {
    let value = required(value, field, errors)?;
    let length = value.chars().count();
    if length > MAX_FIELD_LENGTH {
        errors.add(
            field,
            ValidationError::TooLong {
                max: MAX_FIELD_LENGTH,
                length,
            },
        );
        return None;
    }
    Some(value)
}

fn parse_address(value: &str, field: Field, errors: &mut FieldErrors) -> Option<IpAddr> {
    match value.parse::<IpAddr>() {
        Ok(addr) => Some(addr),
        Err(_) => {
            errors.add(field, ValidationError::InvalidAddressFormat);
            None
        }
    }
}

/// Parses the interface selector and checks it against `1..=interface_count`.
fn resolve_interface(value: &str, interface_count: usize) -> Option<u32> {
    let index: i64 = value.parse().ok()?;
    let count = i64::try_from(interface_count).unwrap_or(i64::MAX);
    if (1..=count).contains(&index) {
        u32::try_from(index).ok()
    } else {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
