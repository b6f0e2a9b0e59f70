pub struct Config {
    /// Destination UDP port for every magic packet.
    ///
    /// Wake-on-LAN listeners conventionally watch port 7 or 9.
    pub port: u16,
    /// Enables per-MAC and per-send debug output.
    pub verbose: bool,
}
