//! # Magic-Packet Framing
//!
//! The Wake-on-LAN payload has a fixed layout: a six-byte synchronization
//! header of `0xFF` followed by the target MAC address repeated 16 times,
//! 102 bytes total. It travels as a plain UDP datagram, the portable route
//! that needs no raw-socket privileges.

use pnet::util::MacAddr;

const SYNC_HEADER_LEN: usize = 6;
const MAC_LEN: usize = 6;
const MAC_REPETITIONS: usize = 16;

/// Wire size of one magic packet.
pub const MAGIC_PACKET_LEN: usize = SYNC_HEADER_LEN + MAC_REPETITIONS * MAC_LEN;

/// One fully framed Wake-on-LAN payload.
///
/// The buffer can be retargeted to another MAC between sends; the
/// synchronization header is written once.
pub struct MagicPacket {
    buffer: [u8; MAGIC_PACKET_LEN],
}

impl MagicPacket {
    pub fn new(mac: MacAddr) -> Self {
        let mut packet = Self {
            buffer: [0xFF; MAGIC_PACKET_LEN],
        };
        packet.retarget(mac);
        packet
    }

    /// Rewrites all 16 MAC repetitions for a new target, reusing the buffer.
    pub fn retarget(&mut self, mac: MacAddr) {
        let octets: [u8; MAC_LEN] = mac.octets();
        for repetition in 0..MAC_REPETITIONS {
            let offset = SYNC_HEADER_LEN + repetition * MAC_LEN;
            self.buffer[offset..offset + MAC_LEN].copy_from_slice(&octets);
        }
    }

    /// The raw 102-byte wire payload.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }
}
