//! Shared helpers for the end-to-end tests.

use std::net::{IpAddr, Ipv4Addr, UdpSocket};
use std::time::Duration;

use lanwake_common::network::target::Destination;

/// Binds a loopback UDP receiver and returns it together with the
/// destination that reaches it.
pub fn loopback_receiver() -> (UdpSocket, Destination) {
    let socket = UdpSocket::bind((Ipv4Addr::LOCALHOST, 0)).expect("bind loopback receiver");
    socket
        .set_read_timeout(Some(Duration::from_secs(5)))
        .expect("set read timeout");
    let port = socket.local_addr().expect("local addr").port();

    (socket, Destination::new(IpAddr::V4(Ipv4Addr::LOCALHOST), port))
}
