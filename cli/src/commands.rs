pub mod wake;

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

#[derive(Parser)]
#[command(name = "lanwake")]
#[command(about = "Broadcast Wake-on-LAN magic packets across subnets.")]
#[command(group(ArgGroup::new("macs").required(true).multiple(true)))]
pub struct CommandLine {
    /// MAC address to wake
    #[arg(short = 'm', long = "mac", value_name = "MAC", group = "macs")]
    pub mac: Vec<String>,

    /// Input file with MAC addresses, one per line
    #[arg(long = "mac-file", value_name = "FILE", group = "macs")]
    pub mac_file: Option<PathBuf>,

    /// Broadcast IP address to send to
    #[arg(short = 's', long = "broadcast", value_name = "IP")]
    pub broadcast: Vec<String>,

    /// Input file with subnet broadcast IPs
    #[arg(long = "broadcast-file", value_name = "FILE")]
    pub broadcast_file: Option<PathBuf>,

    /// CIDR of a subnet to broadcast into
    #[arg(short = 'c', long = "cidr", value_name = "CIDR")]
    pub cidr: Vec<String>,

    /// Input file with CIDRs
    #[arg(long = "cidr-file", value_name = "FILE")]
    pub cidr_file: Option<PathBuf>,

    /// Destination UDP port for the magic packets
    #[arg(short = 'p', long = "port", value_name = "PORT", default_value_t = 7)]
    pub port: u16,

    /// Show each parsed MAC and each send
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// True when no destination option of any kind was supplied, which
    /// selects the global broadcast default.
    pub fn no_destination_args(&self) -> bool {
        self.broadcast.is_empty()
            && self.broadcast_file.is_none()
            && self.cidr.is_empty()
            && self.cidr_file.is_none()
    }
}
