//! Plain-text tables for stdout.
//!
//! Column layout: source left-aligned in 20 characters, key fields
//! right-aligned in 8, count right-aligned in 5.

use crate::aggregator::{RankedEntry, RequestKey, ResponseKey};

/// Render the Who-Is table
pub fn format_who_is_table(entries: &[RankedEntry<RequestKey>], top: usize) -> String {
    let mut lines = vec![format!("----- Top {} Who-Is -----", top), String::new()];

    for entry in entries {
        lines.push(format!(
            "{:<20} {:>8} {:>8} {:>5}",
            entry.key.source.to_string(),
            format_limit(entry.key.range_low),
            format_limit(entry.key.range_high),
            entry.count
        ));
    }

    lines.push(String::new());
    lines.join("\n")
}

/// Render the I-Am table
pub fn format_i_am_table(entries: &[RankedEntry<ResponseKey>], top: usize) -> String {
    let mut lines = vec![format!("----- Top {} I-Am -----", top), String::new()];

    for entry in entries {
        lines.push(format!(
            "{:<20} {:>8} {:>5}",
            entry.key.source.to_string(),
            entry.key.device_id,
            entry.count
        ));
    }

    lines.push(String::new());
    lines.join("\n")
}

// unbounded Who-Is has no limits
fn format_limit(limit: Option<u32>) -> String {
    limit.map_or_else(|| "-".to_string(), |l| l.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::Address;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_who_is_layout() {
        let entries = vec![
            RankedEntry {
                key: RequestKey {
                    source: Address::remote_station(5, [0x0a]),
                    range_low: Some(100),
                    range_high: Some(200),
                },
                count: 12,
            },
            RankedEntry {
                key: RequestKey {
                    source: Address::local_station([3]),
                    range_low: None,
                    range_high: None,
                },
                count: 2,
            },
        ];

        let text = format_who_is_table(&entries, 20);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "----- Top 20 Who-Is -----");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "5:10                      100      200    12");
        assert_eq!(lines[3], "3                           -        -     2");
    }

    #[test]
    fn test_i_am_layout() {
        let entries = vec![RankedEntry {
            key: ResponseKey {
                source: Address::local_station([192, 168, 1, 10, 0xBA, 0xC0]),
                device_id: 1234,
            },
            count: 3,
        }];

        let text = format_i_am_table(&entries, 5);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "----- Top 5 I-Am -----");
        assert_eq!(lines[2], "192.168.1.10             1234     3");
    }

    #[test]
    fn test_empty_table_has_header_only() {
        let text = format_i_am_table(&[], 20);
        assert_eq!(text, "----- Top 20 I-Am -----\n\n");
    }
}
