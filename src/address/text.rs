//! Textual address forms.
//!
//! | text      | address              |
//! |-----------|----------------------|
//! | `*`       | local broadcast      |
//! | `*:*`     | global broadcast     |
//! | `N:*`     | remote broadcast     |
//! | `N:S`     | remote station       |
//! | `S`       | local station        |
//! | `null`    | null                 |
//!
//! A station `S` is a decimal byte (`12`), a hex string (`0x0a0b`), or an
//! IPv4 address with optional port (`192.168.1.10`, `10.0.0.1:47809`).

use super::Address;
use crate::utils::config::{BACNET_DEFAULT_PORT, GLOBAL_BROADCAST_NETWORK};
use crate::utils::error::AddressError;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.is_empty() {
            return Err(AddressError::Empty);
        }
        if s.eq_ignore_ascii_case("null") {
            return Ok(Address::Null);
        }

        match s {
            "*" => return Ok(Address::LocalBroadcast),
            "*:*" => return Ok(Address::GlobalBroadcast),
            _ => {}
        }

        // "a.b.c.d:port" is a local station, not a network prefix
        if let Some((net, station)) = s.split_once(':') {
            if !net.contains('.') {
                let net = parse_network(net)?;
                return if station == "*" {
                    Ok(Address::RemoteBroadcast(net))
                } else {
                    Ok(Address::RemoteStation(net, parse_station(station)?))
                };
            }
        }

        Ok(Address::LocalStation(parse_station(s)?))
    }
}

impl TryFrom<String> for Address {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Address> for String {
    fn from(addr: Address) -> Self {
        addr.to_string()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Address::Null => f.write_str("null"),
            Address::LocalBroadcast => f.write_str("*"),
            Address::LocalStation(station) => f.write_str(&format_station(station)),
            Address::RemoteBroadcast(net) => write!(f, "{}:*", net),
            Address::RemoteStation(net, station) => {
                write!(f, "{}:{}", net, format_station(station))
            }
            Address::GlobalBroadcast => f.write_str("*:*"),
        }
    }
}

/// Parse a network number
///
/// **Private** - 65535 is the global broadcast network and never a valid prefix
fn parse_network(s: &str) -> Result<u16, AddressError> {
    match s.trim().parse::<u16>() {
        Ok(net) if net != GLOBAL_BROADCAST_NETWORK => Ok(net),
        _ => Err(AddressError::InvalidNetwork(s.to_string())),
    }
}

/// Parse station bytes from decimal, hex, or IPv4 form
///
/// **Public** - also used for bare station columns in decoder output
pub fn parse_station(s: &str) -> Result<Vec<u8>, AddressError> {
    let s = s.trim();
    let invalid = || AddressError::InvalidStation(s.to_string());

    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        return decode_hex(hex).ok_or_else(invalid);
    }

    if s.contains('.') {
        let (ip, port) = match s.split_once(':') {
            Some((ip, port)) => (ip, port.parse::<u16>().map_err(|_| invalid())?),
            None => (s, BACNET_DEFAULT_PORT),
        };
        let ip: Ipv4Addr = ip.parse().map_err(|_| invalid())?;

        let mut station = ip.octets().to_vec();
        station.extend_from_slice(&port.to_be_bytes());
        return Ok(station);
    }

    s.parse::<u8>().map(|b| vec![b]).map_err(|_| invalid())
}

/// Render station bytes in the shortest readable form
///
/// **Public** - used by table output for station columns
pub fn format_station(station: &[u8]) -> String {
    match station {
        [b] => b.to_string(),
        [a, b, c, d, hi, lo] => {
            let ip = Ipv4Addr::new(*a, *b, *c, *d);
            let port = u16::from_be_bytes([*hi, *lo]);
            if port == BACNET_DEFAULT_PORT {
                ip.to_string()
            } else {
                format!("{}:{}", ip, port)
            }
        }
        _ => {
            let hex: String = station.iter().map(|b| format!("{:02x}", b)).collect();
            format!("0x{}", hex)
        }
    }
}

fn decode_hex(hex: &str) -> Option<Vec<u8>> {
    if hex.is_empty() || hex.len() % 2 != 0 || !hex.is_ascii() {
        return None;
    }

    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).ok())
        .collect()
}
