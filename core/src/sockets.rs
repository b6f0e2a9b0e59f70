//! # Per-Family Socket Set
//!
//! One outbound UDP socket per address family actually present among the
//! resolved destinations, created lazily at run start and released when the
//! run's scope ends, on every exit path.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, UdpSocket};

use lanwake_common::network::target::Destination;
use tracing::warn;

/// The run's outbound sockets, at most one per address family.
///
/// A family whose socket could not be created keeps a `None` slot; sends
/// toward it surface as per-destination dispatch errors instead of aborting
/// the run.
pub struct SocketSet {
    v4: Option<UdpSocket>,
    v6: Option<UdpSocket>,
}

impl SocketSet {
    /// Opens sockets for exactly the address families present in
    /// `destinations`.
    pub fn for_destinations(destinations: &[Destination]) -> Self {
        let needs_v4 = destinations.iter().any(|dest| dest.addr.is_ipv4());
        let needs_v6 = destinations.iter().any(|dest| dest.addr.is_ipv6());

        Self {
            v4: if needs_v4 { open_v4() } else { None },
            v6: if needs_v6 { open_v6() } else { None },
        }
    }

    /// The socket matching `addr`'s family, if one was created.
    pub fn for_family(&self, addr: &IpAddr) -> Option<&UdpSocket> {
        match addr {
            IpAddr::V4(_) => self.v4.as_ref(),
            IpAddr::V6(_) => self.v6.as_ref(),
        }
    }
}

/// An unconnected IPv4 sender with `SO_BROADCAST` enabled.
fn open_v4() -> Option<UdpSocket> {
    let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0)).and_then(|socket| {
        socket.set_broadcast(true)?;
        Ok(socket)
    });

    match socket {
        Ok(socket) => Some(socket),
        Err(err) => {
            warn!("no IPv4 socket available: {err}");
            None
        }
    }
}

fn open_v6() -> Option<UdpSocket> {
    match UdpSocket::bind((Ipv6Addr::UNSPECIFIED, 0)) {
        Ok(socket) => Some(socket),
        Err(err) => {
            warn!("no IPv6 socket available: {err}");
            None
        }
    }
}
