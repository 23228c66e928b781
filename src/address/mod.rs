//! BACnet addresses as seen in decoded traces.
//!
//! An address is one of five canonical addressing modes, plus a `Null`
//! mode for records whose source or destination was not decoded.
//!
//! The derived ordering sorts by mode first (in declaration order) and then
//! by payload, network number before station bytes. Rankings rely on it
//! being total and stable.

pub mod text;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A decoded BACnet address
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Address {
    /// No address present
    Null,

    /// Broadcast on the local network
    LocalBroadcast,

    /// A station on the local network
    LocalStation(Vec<u8>),

    /// Broadcast on a remote network
    RemoteBroadcast(u16),

    /// A station on a remote network
    RemoteStation(u16, Vec<u8>),

    /// Broadcast to every network
    GlobalBroadcast,
}

/// Addressing mode of an [`Address`], without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressMode {
    Null,
    LocalBroadcast,
    LocalStation,
    RemoteBroadcast,
    RemoteStation,
    GlobalBroadcast,
}

impl Address {
    /// Build a local station address from its raw bytes
    pub fn local_station(station: impl Into<Vec<u8>>) -> Self {
        Address::LocalStation(station.into())
    }

    /// Build a remote station address from a network number and raw bytes
    pub fn remote_station(network: u16, station: impl Into<Vec<u8>>) -> Self {
        Address::RemoteStation(network, station.into())
    }

    /// The addressing mode tag
    pub fn mode(&self) -> AddressMode {
        match self {
            Address::Null => AddressMode::Null,
            Address::LocalBroadcast => AddressMode::LocalBroadcast,
            Address::LocalStation(_) => AddressMode::LocalStation,
            Address::RemoteBroadcast(_) => AddressMode::RemoteBroadcast,
            Address::RemoteStation(_, _) => AddressMode::RemoteStation,
            Address::GlobalBroadcast => AddressMode::GlobalBroadcast,
        }
    }

    /// Network number, for the remote modes only
    pub fn network(&self) -> Option<u16> {
        match self {
            Address::RemoteBroadcast(net) | Address::RemoteStation(net, _) => Some(*net),
            _ => None,
        }
    }

    /// Station bytes, for the station modes only
    pub fn station(&self) -> Option<&[u8]> {
        match self {
            Address::LocalStation(station) | Address::RemoteStation(_, station) => {
                Some(station.as_slice())
            }
            _ => None,
        }
    }

    /// Whether this is one of the five canonical modes
    ///
    /// Only canonical addresses may be used as filter patterns.
    pub fn is_canonical(&self) -> bool {
        !matches!(self, Address::Null)
    }
}

impl AddressMode {
    /// Human-readable mode name used in logs and error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressMode::Null => "null",
            AddressMode::LocalBroadcast => "local broadcast",
            AddressMode::LocalStation => "local station",
            AddressMode::RemoteBroadcast => "remote broadcast",
            AddressMode::RemoteStation => "remote station",
            AddressMode::GlobalBroadcast => "global broadcast",
        }
    }
}

impl fmt::Display for AddressMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_tags() {
        assert_eq!(Address::Null.mode(), AddressMode::Null);
        assert_eq!(Address::local_station([1]).mode(), AddressMode::LocalStation);
        assert_eq!(Address::RemoteBroadcast(5).mode(), AddressMode::RemoteBroadcast);
        assert_eq!(Address::remote_station(5, [9]).mode(), AddressMode::RemoteStation);
    }

    #[test]
    fn test_payload_accessors() {
        let addr = Address::remote_station(12, [0x0a, 0x0b]);
        assert_eq!(addr.network(), Some(12));
        assert_eq!(addr.station(), Some(&[0x0a, 0x0b][..]));

        assert_eq!(Address::LocalBroadcast.network(), None);
        assert_eq!(Address::RemoteBroadcast(3).station(), None);
    }

    #[test]
    fn test_ordering_by_mode_then_payload() {
        let mut addrs = vec![
            Address::GlobalBroadcast,
            Address::remote_station(2, [1]),
            Address::RemoteBroadcast(2),
            Address::local_station([2]),
            Address::local_station([1, 0]),
            Address::LocalBroadcast,
            Address::remote_station(1, [9]),
        ];
        addrs.sort();

        assert_eq!(
            addrs,
            vec![
                Address::LocalBroadcast,
                Address::local_station([1, 0]),
                Address::local_station([2]),
                Address::RemoteBroadcast(2),
                Address::remote_station(1, [9]),
                Address::remote_station(2, [1]),
                Address::GlobalBroadcast,
            ]
        );
    }

    #[test]
    fn test_canonical_modes() {
        assert!(!Address::Null.is_canonical());
        assert!(Address::GlobalBroadcast.is_canonical());
    }
}
