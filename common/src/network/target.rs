//! # Wake Target Model
//!
//! A destination is an IP address plus the fixed WOL port. It comes from
//! either a literal broadcast address or a CIDR block whose subnet
//! broadcast address is derived.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

use super::{ParseError, broadcast};

/// Where one magic packet goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Destination {
    pub addr: IpAddr,
    pub port: u16,
}

impl Destination {
    pub fn new(addr: IpAddr, port: u16) -> Self {
        Self { addr, port }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.addr, self.port)
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.socket_addr())
    }
}

/// Parses a literal IPv4 or IPv6 destination address.
pub fn parse_ip(raw: &str) -> Result<IpAddr, ParseError> {
    raw.trim()
        .parse::<IpAddr>()
        .map_err(|err| ParseError::new(raw, err.to_string()))
}

/// Parses `address/prefix` CIDR notation into the subnet broadcast address.
///
/// Only IPv4 subnets have a broadcast address; IPv6 CIDRs are rejected
/// outright rather than mishandled.
pub fn parse_cidr(raw: &str) -> Result<IpAddr, ParseError> {
    let trimmed = raw.trim();

    let Some((addr_part, prefix_part)) = trimmed.split_once('/') else {
        return Err(ParseError::new(raw, "expected address/prefix notation"));
    };

    if addr_part.parse::<Ipv6Addr>().is_ok() {
        return Err(ParseError::new(raw, "IPv6 subnets have no broadcast address"));
    }

    let base = addr_part
        .parse::<Ipv4Addr>()
        .map_err(|err| ParseError::new(raw, format!("invalid address [{addr_part}]: {err}")))?;

    let prefix = prefix_part
        .parse::<u8>()
        .map_err(|err| ParseError::new(raw, format!("invalid prefix [{prefix_part}]: {err}")))?;

    let addr = broadcast::broadcast(base, prefix)
        .map_err(|err| ParseError::new(raw, err.to_string()))?;

    Ok(IpAddr::V4(addr))
}
