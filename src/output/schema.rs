//! Output JSON schema definitions for summary reports.
//!
//! Schema is versioned to allow future evolution.

use crate::aggregator::{RankedEntry, RequestKey, ResponseKey, RunStats};
use crate::filter::FilterSet;
use serde::{Deserialize, Serialize};

/// Top-level report written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Schema version for compatibility checking
    pub version: String,

    /// Timestamp when the report was generated (RFC 3339)
    pub generated_at: String,

    /// Inputs in the order they were processed
    pub inputs: Vec<String>,

    /// Filters that were active for the run
    pub filters: ReportFilters,

    pub stats: RunStats,

    /// Top Who-Is senders
    pub who_is: Vec<WhoIsRow>,

    /// Top I-Am senders
    pub i_am: Vec<IAmRow>,
}

/// Filters in their textual form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhoIsRow {
    pub source: String,

    /// Absent for an unbounded Who-Is
    pub low: Option<u32>,
    pub high: Option<u32>,

    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IAmRow {
    pub source: String,
    pub device_id: u32,
    pub count: u64,
}

impl From<&FilterSet> for ReportFilters {
    fn from(filters: &FilterSet) -> Self {
        Self {
            source: filters.source().map(ToString::to_string),
            destination: filters.destination().map(ToString::to_string),
            host: filters.host().map(ToString::to_string),
        }
    }
}

impl From<&RankedEntry<RequestKey>> for WhoIsRow {
    fn from(entry: &RankedEntry<RequestKey>) -> Self {
        Self {
            source: entry.key.source.to_string(),
            low: entry.key.range_low,
            high: entry.key.range_high,
            count: entry.count,
        }
    }
}

impl From<&RankedEntry<ResponseKey>> for IAmRow {
    fn from(entry: &RankedEntry<ResponseKey>) -> Self {
        Self {
            source: entry.key.source.to_string(),
            device_id: entry.key.device_id,
            count: entry.count,
        }
    }
}
