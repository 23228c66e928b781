//! Decoded message records and their in-memory form.
//!
//! Records arrive from an external decoder as JSON objects. The raw shape
//! is permissive (every field optional, several aliases); conversion into a
//! [`Message`] enforces the fields each message kind needs.

use crate::address::Address;
use crate::utils::config::{I_AM_TYPE_NAMES, WHO_IS_TYPE_NAMES};
use crate::utils::error::ParseError;
use serde::{Deserialize, Serialize};

/// A decoded discovery message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Who-Is; both range limits present or both absent (unbounded)
    DiscoveryRequest {
        source: Address,
        destination: Address,
        range_low: Option<u32>,
        range_high: Option<u32>,
    },

    /// I-Am carrying the responding device's instance number
    DiscoveryResponse {
        source: Address,
        destination: Address,
        device_id: u32,
    },

    /// Any other service; filtered but never counted
    Other {
        source: Address,
        destination: Address,
        service: String,
    },
}

/// Message kind without payload, for logs and statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageKind {
    WhoIs,
    IAm,
    Other,
}

impl Message {
    pub fn source(&self) -> &Address {
        match self {
            Message::DiscoveryRequest { source, .. }
            | Message::DiscoveryResponse { source, .. }
            | Message::Other { source, .. } => source,
        }
    }

    pub fn destination(&self) -> &Address {
        match self {
            Message::DiscoveryRequest { destination, .. }
            | Message::DiscoveryResponse { destination, .. }
            | Message::Other { destination, .. } => destination,
        }
    }

    pub fn kind(&self) -> MessageKind {
        match self {
            Message::DiscoveryRequest { .. } => MessageKind::WhoIs,
            Message::DiscoveryResponse { .. } => MessageKind::IAm,
            Message::Other { .. } => MessageKind::Other,
        }
    }
}

/// One record as written by the decoder
///
/// **Public** - deserialized straight from a JSON line
#[derive(Debug, Clone, Deserialize)]
pub struct TraceRecord {
    /// Service name, e.g. "who-is", "i-am", "read-property"
    #[serde(rename = "type", alias = "service")]
    pub kind: String,

    #[serde(default, alias = "pduSource")]
    pub source: Option<String>,

    #[serde(default, alias = "pduDestination")]
    pub destination: Option<String>,

    #[serde(default, alias = "deviceInstanceRangeLowLimit")]
    pub low: Option<u32>,

    #[serde(default, alias = "deviceInstanceRangeHighLimit")]
    pub high: Option<u32>,

    #[serde(default, alias = "iAmDeviceIdentifier")]
    pub device_id: Option<DeviceIdentifier>,
}

/// Device identifier as either a bare instance or an `[object type, instance]` pair
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DeviceIdentifier {
    Instance(u32),
    Pair(serde_json::Value, u32),
}

impl DeviceIdentifier {
    pub fn instance(&self) -> u32 {
        match self {
            DeviceIdentifier::Instance(instance) | DeviceIdentifier::Pair(_, instance) => {
                *instance
            }
        }
    }
}

impl TryFrom<TraceRecord> for Message {
    type Error = ParseError;

    fn try_from(record: TraceRecord) -> Result<Self, Self::Error> {
        let source = parse_optional_address(record.source.as_deref())?;
        let destination = parse_optional_address(record.destination.as_deref())?;

        if is_kind(&record.kind, WHO_IS_TYPE_NAMES) {
            if record.low.is_some() != record.high.is_some() {
                return Err(ParseError::MalformedRecord(
                    "who-is carries only one device instance range limit".to_string(),
                ));
            }
            return Ok(Message::DiscoveryRequest {
                source,
                destination,
                range_low: record.low,
                range_high: record.high,
            });
        }

        if is_kind(&record.kind, I_AM_TYPE_NAMES) {
            let device_id = record.device_id.ok_or_else(|| {
                ParseError::MalformedRecord("i-am without a device identifier".to_string())
            })?;
            return Ok(Message::DiscoveryResponse {
                source,
                destination,
                device_id: device_id.instance(),
            });
        }

        Ok(Message::Other {
            source,
            destination,
            service: record.kind,
        })
    }
}

/// Absent addresses decode as `Address::Null`
///
/// **Private** - helper for record conversion
fn parse_optional_address(text: Option<&str>) -> Result<Address, ParseError> {
    match text {
        Some(text) => Ok(text.parse::<Address>()?),
        None => Ok(Address::Null),
    }
}

fn is_kind(kind: &str, names: &[&str]) -> bool {
    names.iter().any(|name| name.eq_ignore_ascii_case(kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> TraceRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_who_is_bounded() {
        let msg = Message::try_from(record(json!({
            "type": "who-is",
            "source": "5:0x0a",
            "destination": "*:*",
            "low": 100,
            "high": 200
        })))
        .unwrap();

        assert_eq!(
            msg,
            Message::DiscoveryRequest {
                source: Address::remote_station(5, [0x0a]),
                destination: Address::GlobalBroadcast,
                range_low: Some(100),
                range_high: Some(200),
            }
        );
        assert_eq!(msg.kind(), MessageKind::WhoIs);
    }

    #[test]
    fn test_who_is_unbounded() {
        let msg = Message::try_from(record(json!({
            "type": "WhoIsRequest",
            "pduSource": "1"
        })))
        .unwrap();

        assert_eq!(msg.source(), &Address::local_station([1]));
        assert_eq!(msg.destination(), &Address::Null);
    }

    #[test]
    fn test_who_is_half_range_is_malformed() {
        let err = Message::try_from(record(json!({
            "type": "who-is",
            "source": "1",
            "low": 5
        })))
        .unwrap_err();

        assert!(matches!(err, ParseError::MalformedRecord(_)));
    }

    #[test]
    fn test_i_am_identifier_forms() {
        let bare = Message::try_from(record(json!({
            "type": "i-am", "source": "2", "device_id": 1234
        })))
        .unwrap();
        let pair = Message::try_from(record(json!({
            "type": "IAmRequest", "source": "2", "iAmDeviceIdentifier": ["device", 1234]
        })))
        .unwrap();

        assert_eq!(bare, pair);
        assert!(matches!(bare, Message::DiscoveryResponse { device_id: 1234, .. }));
    }

    #[test]
    fn test_i_am_without_identifier_is_malformed() {
        let err = Message::try_from(record(json!({ "type": "i-am", "source": "2" }))).unwrap_err();
        assert!(matches!(err, ParseError::MalformedRecord(_)));
    }

    #[test]
    fn test_other_service_passes_through() {
        let msg = Message::try_from(record(json!({
            "type": "read-property", "source": "1", "destination": "2"
        })))
        .unwrap();

        assert_eq!(msg.kind(), MessageKind::Other);
    }

    #[test]
    fn test_bad_address_is_rejected() {
        let err = Message::try_from(record(json!({
            "type": "i-am", "source": "70000:1", "device_id": 1
        })))
        .unwrap_err();

        assert!(matches!(err, ParseError::InvalidAddress(_)));
    }
}
