//! Frequency tables for Who-Is and I-Am traffic.
//!
//! Entries are created on first sight of a key and only ever incremented.
//! Partial tables built from separate inputs combine with `merge`, which
//! sums counts per key, so merged totals equal a single sequential pass.

use crate::address::Address;
use crate::parser::schema::Message;
use log::trace;
use std::collections::HashMap;
use std::hash::Hash;

/// Who-Is grouping key: who asked, and for which device range
///
/// Field order is the ranking tie-break order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestKey {
    pub source: Address,
    pub range_low: Option<u32>,
    pub range_high: Option<u32>,
}

/// I-Am grouping key: who answered, and as which device
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResponseKey {
    pub source: Address,
    pub device_id: u32,
}

/// Key -> observation count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<K: Eq + Hash> {
    counts: HashMap<K, u64>,
}

impl<K: Eq + Hash> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash> FrequencyTable<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one observation of `key`
    pub fn increment(&mut self, key: K) {
        self.add(key, 1);
    }

    /// Count `count` observations of `key` at once
    pub fn add(&mut self, key: K, count: u64) {
        *self.counts.entry(key).or_insert(0) += count;
    }

    pub fn get(&self, key: &K) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> {
        self.counts.iter().map(|(key, count)| (key, *count))
    }

    /// Fold another table into this one, summing counts per key
    pub fn merge(&mut self, other: FrequencyTable<K>) {
        for (key, count) in other.counts {
            self.add(key, count);
        }
    }
}

/// The two tables of one summary run
///
/// **Public** - fed one filtered message at a time through `observe`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregator {
    requests: FrequencyTable<RequestKey>,
    responses: FrequencyTable<ResponseKey>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a message that already passed the filters
    ///
    /// Messages other than Who-Is and I-Am are ignored.
    pub fn observe(&mut self, msg: &Message) {
        match msg {
            Message::DiscoveryRequest {
                source,
                range_low,
                range_high,
                ..
            } => {
                trace!("who-is from {} ({:?}..{:?})", source, range_low, range_high);
                self.requests.increment(RequestKey {
                    source: source.clone(),
                    range_low: *range_low,
                    range_high: *range_high,
                });
            }
            Message::DiscoveryResponse {
                source, device_id, ..
            } => {
                trace!("i-am from {} (device {})", source, device_id);
                self.responses.increment(ResponseKey {
                    source: source.clone(),
                    device_id: *device_id,
                });
            }
            Message::Other { .. } => {}
        }
    }

    /// Fold a partial aggregator (e.g. one per input file) into this one
    pub fn merge(&mut self, other: Aggregator) {
        self.requests.merge(other.requests);
        self.responses.merge(other.responses);
    }

    pub fn requests(&self) -> &FrequencyTable<RequestKey> {
        &self.requests
    }

    pub fn responses(&self) -> &FrequencyTable<ResponseKey> {
        &self.responses
    }
}
