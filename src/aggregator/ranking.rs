//! Top-N ranking of frequency tables.
//!
//! Entries are ordered by count (descending). Equal counts fall back to the
//! key's own ordering (ascending), which starts with the source address and
//! then compares the remaining key fields, so the output never depends on
//! hash iteration order.

use super::tables::FrequencyTable;
use log::debug;
use serde::Serialize;
use std::hash::Hash;

/// One ranked row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry<K> {
    pub key: K,
    pub count: u64,
}

/// Return at most `n` entries of `table`, highest count first
///
/// **Public** - main entry point for ranking
///
/// # Arguments
/// * `table` - Frequency table to rank (not modified)
/// * `n` - Maximum number of rows; fewer are returned if the table is smaller
pub fn top_n<K>(table: &FrequencyTable<K>, n: usize) -> Vec<RankedEntry<K>>
where
    K: Clone + Eq + Hash + Ord,
{
    debug!("Ranking top {} of {} entries", n, table.len());

    let mut entries: Vec<(&K, u64)> = table.iter().collect();
    entries.sort_by(|(a_key, a_count), (b_key, b_count)| {
        b_count.cmp(a_count).then_with(|| a_key.cmp(b_key))
    });

    entries
        .into_iter()
        .take(n)
        .map(|(key, count)| RankedEntry {
            key: key.clone(),
            count,
        })
        .collect()
}
