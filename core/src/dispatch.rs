//! # Packet Dispatch
//!
//! The orchestration core: every MAC address crossed with every resolved
//! destination, one UDP datagram per pair. Outcomes are reported per pair
//! and a failed pair never blocks the rest of the run.

use std::io;

use lanwake_common::network::target::Destination;
use pnet::util::MacAddr;

use crate::packet::MagicPacket;
use crate::sockets::SocketSet;

/// Aggregate counters of one dispatch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DispatchStats {
    /// Datagrams handed to the network stack without error.
    pub sent_packets: u64,
    /// MAC addresses iterated, whether or not any send for them succeeded.
    pub number_macs: u64,
    /// Failed (MAC, destination) pairs, missing-socket skips included.
    pub errors: u64,
}

/// The result of one (MAC, destination) attempt.
pub enum SendOutcome<'a> {
    /// The local transmit call returned without error. Wake-on-LAN is
    /// fire-and-forget; this says nothing about the remote host.
    Sent { mac: MacAddr, dest: &'a Destination },
    /// No socket exists for the destination's address family; nothing was
    /// attempted for this pair.
    NoSocket { mac: MacAddr, dest: &'a Destination },
    /// The transport rejected the send.
    SendFailed {
        mac: MacAddr,
        dest: &'a Destination,
        error: io::Error,
    },
}

/// Sends the magic packet of every MAC in `macs` to every destination,
/// invoking `observe` once per (MAC, destination) attempt.
///
/// MACs are pulled lazily in input order; destinations keep their resolved
/// order. The packet buffer is reused across MACs. `number_macs` counts
/// MACs iterated.
pub fn send_each_mac_to_all_nets<M, F>(
    macs: M,
    destinations: &[Destination],
    sockets: &SocketSet,
    mut observe: F,
) -> DispatchStats
where
    M: IntoIterator<Item = MacAddr>,
    F: FnMut(&SendOutcome),
{
    let mut stats = DispatchStats::default();
    let mut packet = MagicPacket::new(MacAddr::zero());

    for mac in macs {
        stats.number_macs += 1;
        packet.retarget(mac);

        for dest in destinations {
            match sockets.for_family(&dest.addr) {
                Some(socket) => match socket.send_to(packet.as_bytes(), dest.socket_addr()) {
                    Ok(_) => {
                        stats.sent_packets += 1;
                        observe(&SendOutcome::Sent { mac, dest });
                    }
                    Err(error) => {
                        stats.errors += 1;
                        observe(&SendOutcome::SendFailed { mac, dest, error });
                    }
                },
                None => {
                    stats.errors += 1;
                    observe(&SendOutcome::NoSocket { mac, dest });
                }
            }
        }
    }

    stats
}
