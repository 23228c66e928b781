use std::io::Write;
use tempfile::NamedTempFile;
use whois_iam_summary::address::Address;
use whois_iam_summary::parser::{parse_record_line, Message, MessageKind, TraceReader};
use whois_iam_summary::utils::error::ParseError;

#[test]
fn test_parse_who_is_line() {
    let msg = parse_record_line(
        r#"{"timestamp": 1.5, "type": "who-is", "source": "192.168.1.20", "destination": "*", "low": 0, "high": 4194303}"#,
    )
    .unwrap();

    assert_eq!(
        msg,
        Message::DiscoveryRequest {
            source: Address::local_station([192, 168, 1, 20, 0xBA, 0xC0]),
            destination: Address::LocalBroadcast,
            range_low: Some(0),
            range_high: Some(4_194_303),
        }
    );
}

#[test]
fn test_parse_i_am_line_with_pair_identifier() {
    let msg = parse_record_line(
        r#"{"type": "i-am", "source": "2001:0x0c", "destination": "*:*", "device_id": [8, 77]}"#,
    )
    .unwrap();

    assert_eq!(msg.kind(), MessageKind::IAm);
    assert!(matches!(msg, Message::DiscoveryResponse { device_id: 77, .. }));
}

#[test]
fn test_missing_type_is_an_error() {
    let result = parse_record_line(r#"{"source": "1"}"#);
    assert!(matches!(result, Err(ParseError::JsonError(_))));
}

#[test]
fn test_read_trace_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"type": "who-is", "source": "1", "destination": "*"}}"#).unwrap();
    writeln!(file, r#"{{"type": "i-am", "source": "2", "destination": "*", "device_id": 5}}"#).unwrap();
    writeln!(file, r#"{{"type": "read-property", "source": "1", "destination": "2"}}"#).unwrap();
    file.flush().unwrap();

    let reader = TraceReader::open(file.path()).unwrap();
    let kinds: Vec<MessageKind> = reader.map(|m| m.unwrap().kind()).collect();

    assert_eq!(
        kinds,
        vec![MessageKind::WhoIs, MessageKind::IAm, MessageKind::Other]
    );
}
