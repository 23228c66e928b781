use whois_iam_summary::address::Address;
use whois_iam_summary::filter::{accepts, matches, try_matches, FilterAddress, FilterSet};
use whois_iam_summary::parser::Message;
use whois_iam_summary::utils::error::FilterError;

fn pattern(text: &str) -> FilterAddress {
    FilterAddress::new(text.parse().unwrap()).unwrap()
}

fn i_am(source: &str, destination: &str) -> Message {
    Message::DiscoveryResponse {
        source: source.parse().unwrap(),
        destination: destination.parse().unwrap(),
        device_id: 1,
    }
}

#[test]
fn test_local_station_exact_bytes() {
    let filter = FilterAddress::new(Address::local_station([1, 2])).unwrap();
    assert!(matches(&Address::local_station([1, 2]), &filter));
    assert!(!matches(&Address::local_station([1, 3]), &filter));
}

#[test]
fn test_remote_broadcast_accepts_stations_on_same_network() {
    let filter = pattern("5:*");
    assert!(matches(&Address::remote_station(5, [9]), &filter));
    assert!(matches(&Address::RemoteBroadcast(5), &filter));
    assert!(!matches(&Address::remote_station(6, [9]), &filter));
    assert!(!matches(&Address::GlobalBroadcast, &filter));
}

#[test]
fn test_local_broadcast_accepts_local_stations() {
    let filter = pattern("*");
    assert!(matches(&"192.168.1.4".parse().unwrap(), &filter));
    assert!(matches(&Address::LocalBroadcast, &filter));
    assert!(!matches(&Address::remote_station(1, [1]), &filter));
    assert!(!matches(&Address::Null, &filter));
}

#[test]
fn test_null_is_not_a_pattern() {
    assert_eq!(
        try_matches(&Address::Null, &Address::Null),
        Err(FilterError::InvalidFilterMode("null".to_string()))
    );
}

#[test]
fn test_no_filters_accept_anything() {
    let filters = FilterSet::default();
    assert!(accepts(&i_am("1", "*"), &filters));
    assert!(accepts(&i_am("null", "null"), &filters));
}

#[test]
fn test_source_failure_wins_over_other_filters() {
    let filters = FilterSet::from_text(Some("1"), Some("*"), Some("2")).unwrap();
    assert!(!accepts(&i_am("2", "*"), &filters));
    assert!(accepts(&i_am("1", "2"), &filters));
}

#[test]
fn test_host_filter() {
    let filters = FilterSet::from_text(None, None, Some("3:0x0a")).unwrap();
    assert!(accepts(&i_am("3:0x0a", "*:*"), &filters));
    assert!(accepts(&i_am("1", "3:0x0a"), &filters));
    assert!(!accepts(&i_am("1", "3:0x0b"), &filters));
}
