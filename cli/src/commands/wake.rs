//! The wake run: resolve destinations, open sockets, fan every MAC out to
//! every destination, then print the summary.

use std::io;
use std::net::IpAddr;
use std::time::{Duration, Instant};

use colored::*;
use lanwake_common::config::Config;
use lanwake_common::network::target::Destination;
use lanwake_common::network::{ParseError, mac, target};
use lanwake_common::utils::lines;
use lanwake_core::dispatch::{self, DispatchStats, SendOutcome};
use lanwake_core::packet::MAGIC_PACKET_LEN;
use lanwake_core::sockets::SocketSet;
use tracing::{debug, error, info};

use crate::commands::CommandLine;
use crate::terminal::format;

/// Global broadcast, used when no destination option of any kind is given.
const DEFAULT_BROADCAST: &str = "255.255.255.255";

/// Runs one wake cycle and returns the combined error count (parse +
/// dispatch) for the process exit status.
pub fn wake(args: &CommandLine, cfg: &Config) -> anyhow::Result<u64> {
    let mut input_errors: u64 = 0;

    let destinations = resolve_destinations(args, cfg, &mut input_errors)?;
    debug!("sending each MAC to {} destinations", destinations.len());

    let sockets = SocketSet::for_destinations(&destinations);

    let mac_lines = lines::values_then_file(args.mac.clone(), args.mac_file.as_deref())?;
    let macs = mac_lines.filter_map(|line| match line {
        Ok(raw) => match mac::parse(&raw) {
            Ok(mac) => {
                debug!("MAC {mac}");
                Some(mac)
            }
            Err(err) => {
                error!("{err}");
                input_errors += 1;
                None
            }
        },
        Err(err) => {
            error!("reading MAC list: {err}");
            input_errors += 1;
            None
        }
    });

    let started = Instant::now();
    let stats = dispatch::send_each_mac_to_all_nets(macs, &destinations, &sockets, report);
    let elapsed = started.elapsed();

    let errors = stats.errors + input_errors;
    summary(&stats, errors, elapsed);
    Ok(errors)
}

/// Collects literal and file-sourced broadcast IPs and CIDR-derived
/// broadcasts, in input order. Falls back to the global broadcast when no
/// destination option was supplied at all.
fn resolve_destinations(
    args: &CommandLine,
    cfg: &Config,
    errors: &mut u64,
) -> anyhow::Result<Vec<Destination>> {
    let mut destinations: Vec<Destination> = Vec::new();

    let broadcasts = if args.no_destination_args() {
        debug!("setting broadcast IP to {DEFAULT_BROADCAST} because no destination was specified");
        vec![DEFAULT_BROADCAST.to_string()]
    } else {
        args.broadcast.clone()
    };

    let ips = lines::values_then_file(broadcasts, args.broadcast_file.as_deref())?;
    collect(ips, target::parse_ip, "broadcast", cfg.port, &mut destinations, errors);

    let cidrs = lines::values_then_file(args.cidr.clone(), args.cidr_file.as_deref())?;
    collect(cidrs, target::parse_cidr, "CIDR", cfg.port, &mut destinations, errors);

    Ok(destinations)
}

/// Drains one lazy destination source, keeping parsed addresses and
/// counting per-item failures without ending the batch.
fn collect(
    stream: impl Iterator<Item = io::Result<String>>,
    parse: impl Fn(&str) -> Result<IpAddr, ParseError>,
    label: &str,
    port: u16,
    destinations: &mut Vec<Destination>,
    errors: &mut u64,
) {
    for line in stream {
        match line {
            Ok(raw) => match parse(&raw) {
                Ok(addr) => destinations.push(Destination::new(addr, port)),
                Err(err) => {
                    error!("{err}");
                    *errors += 1;
                }
            },
            Err(err) => {
                error!("reading {label} list: {err}");
                *errors += 1;
            }
        }
    }
}

fn report(outcome: &SendOutcome) {
    match outcome {
        SendOutcome::Sent { mac, dest } => debug!("sent {mac} to {dest}"),
        SendOutcome::NoSocket { mac, dest } => {
            error!("no socket available for {mac} to address/family {dest}")
        }
        SendOutcome::SendFailed { mac, dest, error } => {
            error!("sending {mac} to {dest}: {error}")
        }
    }
}

fn summary(stats: &DispatchStats, errors: u64, elapsed: Duration) {
    let payload_bytes = stats.sent_packets * MAGIC_PACKET_LEN as u64;
    let errors_fmt: ColoredString = if errors > 0 {
        errors.to_string().red().bold()
    } else {
        errors.to_string().green()
    };

    info!(
        "sent {} WOL packets for {} MACs. size all packets: {} errors: {} time: {}",
        stats.sent_packets.to_string().bold(),
        stats.number_macs.to_string().bold(),
        format::human_bytes(payload_bytes),
        errors_fmt,
        format::human_duration(elapsed).yellow(),
    );
}
