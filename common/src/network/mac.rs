use pnet::util::MacAddr;

use super::ParseError;

/// Parses one MAC address.
///
/// Accepts `:` or `-` separated hex bytes in either letter case; anything
/// that is not exactly six byte groups is a [`ParseError`] carrying the
/// original input.
pub fn parse(raw: &str) -> Result<MacAddr, ParseError> {
    let normalized = raw.trim().replace('-', ":");

    normalized
        .parse::<MacAddr>()
        .map_err(|err| ParseError::new(raw, err.to_string()))
}
