//! Address-based message filtering.
//!
//! This module handles:
//! - Matching a candidate address against a pattern address
//! - Applying source, destination and host filters to decoded messages

pub mod matcher;
pub mod message_filter;

// Re-export main types
pub use matcher::{matches, try_matches, FilterAddress};
pub use message_filter::{accepts, FilterSet, FilterVerdict};
