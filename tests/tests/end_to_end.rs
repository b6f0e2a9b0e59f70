use std::collections::HashSet;

use lanwake_common::network::{mac, target};
use lanwake_core::dispatch::{self, DispatchStats, SendOutcome};
use lanwake_core::packet::MAGIC_PACKET_LEN;
use lanwake_core::sockets::SocketSet;
use lanwake_integration_tests::loopback_receiver;
use pnet::util::MacAddr;

/*************************************************************
           Full parse -> sockets -> dispatch cycles
**************************************************************/

#[test]
fn wakes_two_macs_on_two_nets() {
    let (receiver_a, dest_a) = loopback_receiver();
    let (receiver_b, dest_b) = loopback_receiver();
    let destinations = vec![dest_a, dest_b];

    let raw_macs = ["a1:b2:c3:d4:e5:f6", "A1-B2-C3-D4-E5-01"];
    let macs: Vec<MacAddr> = raw_macs
        .iter()
        .map(|raw| mac::parse(raw).expect("valid MAC"))
        .collect();

    let sockets = SocketSet::for_destinations(&destinations);
    let stats = dispatch::send_each_mac_to_all_nets(macs.clone(), &destinations, &sockets, |_| {});

    assert_eq!(
        stats,
        DispatchStats {
            sent_packets: 4,
            number_macs: 2,
            errors: 0,
        }
    );

    // every receiver sees one correctly framed packet per MAC
    let expected: HashSet<[u8; 6]> = macs.iter().map(|mac| mac.octets()).collect();
    for receiver in [&receiver_a, &receiver_b] {
        let mut seen: HashSet<[u8; 6]> = HashSet::new();
        for _ in 0..2 {
            let mut buffer = [0u8; 256];
            let (len, _) = receiver.recv_from(&mut buffer).expect("receive magic packet");
            assert_eq!(len, MAGIC_PACKET_LEN);
            assert_eq!(&buffer[..6], &[0xFF; 6]);

            let target_mac: [u8; 6] = buffer[6..12].try_into().unwrap();
            for repetition in 0..16 {
                let offset = 6 + repetition * 6;
                assert_eq!(&buffer[offset..offset + 6], &target_mac);
            }
            seen.insert(target_mac);
        }
        assert_eq!(seen, expected);
    }
}

#[test]
fn malformed_entries_cost_one_error_each() {
    let (receiver, dest) = loopback_receiver();
    let destinations = vec![dest];

    let raw_macs = ["not-a-mac", "a1:b2:c3:d4:e5:f6", "11:22:33"];
    let mut failed_inputs = Vec::new();
    let macs: Vec<MacAddr> = raw_macs
        .iter()
        .filter_map(|raw| match mac::parse(raw) {
            Ok(mac) => Some(mac),
            Err(err) => {
                failed_inputs.push(err.input.clone());
                None
            }
        })
        .collect();

    assert_eq!(
        failed_inputs,
        vec!["not-a-mac".to_string(), "11:22:33".to_string()]
    );

    let sockets = SocketSet::for_destinations(&destinations);
    let stats = dispatch::send_each_mac_to_all_nets(macs, &destinations, &sockets, |_| {});
    assert_eq!(stats.sent_packets, 1);
    assert_eq!(stats.errors, 0);

    let mut buffer = [0u8; 256];
    let (len, _) = receiver.recv_from(&mut buffer).expect("receive magic packet");
    assert_eq!(len, MAGIC_PACKET_LEN);
}

#[test]
fn cidr_destination_resolves_before_dispatch() {
    // parse side only; sending to a real subnet broadcast is not something
    // a test environment can observe
    let addr = target::parse_cidr("192.168.40.0/22").expect("valid CIDR");
    assert_eq!(addr.to_string(), "192.168.43.255");
}

#[test]
fn identical_runs_produce_identical_stats() {
    let (_receiver, dest) = loopback_receiver();
    let destinations = vec![dest];
    let sockets = SocketSet::for_destinations(&destinations);

    let macs = vec![
        MacAddr::new(0x02, 0x00, 0x00, 0x00, 0x00, 0x01),
        MacAddr::new(0x02, 0x00, 0x00, 0x00, 0x00, 0x02),
    ];

    let first = dispatch::send_each_mac_to_all_nets(macs.clone(), &destinations, &sockets, |_| {});
    let second = dispatch::send_each_mac_to_all_nets(macs, &destinations, &sockets, |_| {});

    assert_eq!(first, second);
}

#[test]
fn dispatch_reports_every_outcome_variant_by_family() {
    let (_receiver, dest_v4) = loopback_receiver();
    let dest_v6 = lanwake_common::network::target::Destination::new(
        "::1".parse().unwrap(),
        9,
    );
    let sockets = SocketSet::for_destinations(&[dest_v4]);
    let destinations = vec![dest_v4, dest_v6];

    let mut sent = 0;
    let mut no_socket = 0;
    let stats = dispatch::send_each_mac_to_all_nets(
        vec![MacAddr::new(0x02, 0x00, 0x00, 0x00, 0x00, 0x09)],
        &destinations,
        &sockets,
        |outcome| match outcome {
            SendOutcome::Sent { .. } => sent += 1,
            SendOutcome::NoSocket { .. } => no_socket += 1,
            SendOutcome::SendFailed { .. } => panic!("loopback send should not fail"),
        },
    );

    assert_eq!((sent, no_socket), (1, 1));
    assert_eq!(stats.sent_packets, 1);
    assert_eq!(stats.errors, 1);
}
