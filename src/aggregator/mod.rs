//! Aggregation of filtered discovery traffic into ranked tables.
//!
//! This module turns accepted messages into:
//! - Who-Is counts keyed by (source, range low, range high)
//! - I-Am counts keyed by (source, device instance)
//! - Top-N views of either table

pub mod ranking;
pub mod stats;
pub mod tables;

// Re-export main types and functions
pub use ranking::{top_n, RankedEntry};
pub use stats::RunStats;
pub use tables::{Aggregator, FrequencyTable, RequestKey, ResponseKey};
