use std::net::Ipv4Addr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("prefix length /{0} is out of range for IPv4 (0-32)")]
pub struct PrefixError(pub u8);

/// Computes the subnet broadcast address for `base` with `prefix` network bits.
///
/// The host mask has `32 - prefix` low-order bits set over the address read
/// as a big-endian u32, so `/32` returns the address unchanged and `/0`
/// returns `255.255.255.255`.
pub fn broadcast(base: Ipv4Addr, prefix: u8) -> Result<Ipv4Addr, PrefixError> {
    if prefix > 32 {
        return Err(PrefixError(prefix));
    }

    // shr by 32 would overflow, /32 means an empty host mask
    let host_mask: u32 = u32::MAX.checked_shr(u32::from(prefix)).unwrap_or(0);
    let base: u32 = base.into();

    Ok(Ipv4Addr::from(base | host_mask))
}
