//! Per-run bookkeeping for the summary pipeline.

use crate::filter::FilterVerdict;
use crate::parser::schema::MessageKind;
use serde::{Deserialize, Serialize};

/// Counters describing what happened to the input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Inputs read to the end
    pub inputs_read: usize,

    /// Inputs that could not be opened or broke off mid-read
    pub inputs_failed: usize,

    /// Records decoded into messages
    pub records: u64,

    /// Records skipped as malformed
    pub malformed: u64,

    /// Messages rejected by the filters
    pub filtered_out: u64,

    pub who_is: u64,
    pub i_am: u64,

    /// Accepted messages of other kinds (not counted in any table)
    pub other: u64,
}

impl RunStats {
    /// Record the fate of one decoded message
    pub fn record_message(&mut self, kind: MessageKind, verdict: FilterVerdict) {
        self.records += 1;

        if verdict != FilterVerdict::Accepted {
            self.filtered_out += 1;
            return;
        }

        match kind {
            MessageKind::WhoIs => self.who_is += 1,
            MessageKind::IAm => self.i_am += 1,
            MessageKind::Other => self.other += 1,
        }
    }

    /// Fold the counters of another run segment into this one
    pub fn merge(&mut self, other: &RunStats) {
        self.inputs_read += other.inputs_read;
        self.inputs_failed += other.inputs_failed;
        self.records += other.records;
        self.malformed += other.malformed;
        self.filtered_out += other.filtered_out;
        self.who_is += other.who_is;
        self.i_am += other.i_am;
        self.other += other.other;
    }

    pub fn summary(&self) -> String {
        format!(
            "Inputs: {} ok, {} failed | Records: {} | Malformed: {} | Filtered: {} | Who-Is: {} | I-Am: {} | Other: {}",
            self.inputs_read,
            self.inputs_failed,
            self.records,
            self.malformed,
            self.filtered_out,
            self.who_is,
            self.i_am,
            self.other
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_message() {
        let mut stats = RunStats::default();
        stats.record_message(MessageKind::WhoIs, FilterVerdict::Accepted);
        stats.record_message(MessageKind::IAm, FilterVerdict::HostRejected);
        stats.record_message(MessageKind::Other, FilterVerdict::Accepted);

        assert_eq!(stats.records, 3);
        assert_eq!(stats.who_is, 1);
        assert_eq!(stats.i_am, 0);
        assert_eq!(stats.filtered_out, 1);
        assert_eq!(stats.other, 1);
    }

    #[test]
    fn test_merge() {
        let mut total = RunStats {
            inputs_read: 1,
            records: 10,
            ..Default::default()
        };
        total.merge(&RunStats {
            inputs_failed: 1,
            records: 5,
            malformed: 2,
            ..Default::default()
        });

        assert_eq!(total.inputs_read, 1);
        assert_eq!(total.inputs_failed, 1);
        assert_eq!(total.records, 15);
        assert_eq!(total.malformed, 2);
    }

    #[test]
    fn test_summary_includes_other() {
        let mut stats = RunStats::default();
        stats.record_message(MessageKind::Other, FilterVerdict::Accepted);

        let line = stats.summary();
        assert!(line.contains("Records: 1"));
        assert!(line.ends_with("| Other: 1"));
    }
}
