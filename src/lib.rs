//! Who-Is / I-Am Summary
//!
//! Frequency summaries of BACnet device discovery traffic
//! (Who-Is requests and I-Am responses) in decoded network traces.
//!
//! This crate provides the core implementation for the
//! `whois-iam-summary` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! whois-iam-summary summarize capture.jsonl --host 5:*
//! whois-iam-summary schema --show
//! ```
//!
//! ## Library use
//!
//! ```
//! use whois_iam_summary::address::Address;
//! use whois_iam_summary::aggregator::{top_n, Aggregator};
//! use whois_iam_summary::filter::FilterSet;
//! use whois_iam_summary::parser::Message;
//!
//! let filters = FilterSet::new(Some(Address::RemoteBroadcast(5)), None, None).unwrap();
//! let mut aggregator = Aggregator::new();
//!
//! let msg = Message::DiscoveryResponse {
//!     source: Address::remote_station(5, [9]),
//!     destination: Address::GlobalBroadcast,
//!     device_id: 1234,
//! };
//! if filters.accepts(&msg) {
//!     aggregator.observe(&msg);
//! }
//!
//! let ranked = top_n(aggregator.responses(), 20);
//! assert_eq!(ranked[0].count, 1);
//! ```

pub mod address;
pub mod aggregator;
pub mod commands;
pub mod filter;
pub mod output;
pub mod parser;
pub mod utils;
