//! Summarize command implementation.
//!
//! The summarize command:
//! 1. Builds the address filters (fatal if invalid)
//! 2. Streams every input through the filters into per-input tables
//! 3. Merges the per-input tables into the run totals
//! 4. Ranks both tables
//! 5. Prints text tables and/or writes the JSON report

use crate::aggregator::{top_n, Aggregator, RankedEntry, RequestKey, ResponseKey, RunStats};
use crate::commands::models::SummarizeArgs;
use crate::filter::{FilterSet, FilterVerdict};
use crate::output::{format_i_am_table, format_who_is_table, write_report, Report, ReportFilters};
use crate::parser::{Message, TraceReader};
use crate::utils::config::{MAX_TOP_N, SCHEMA_VERSION};
use crate::utils::error::ParseError;
use anyhow::{Context, Result};
use log::{debug, error, info, trace, warn};
use std::path::Path;
use std::time::Instant;

/// Result of a summarize run
#[derive(Debug, Clone)]
pub struct Summary {
    /// Full, unranked tables
    pub aggregator: Aggregator,

    pub stats: RunStats,

    /// Ranked Who-Is rows (at most `top`)
    pub who_is: Vec<RankedEntry<RequestKey>>,

    /// Ranked I-Am rows (at most `top`)
    pub i_am: Vec<RankedEntry<ResponseKey>>,
}

/// Execute the summarize command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Invalid arguments or filter addresses
/// * Every input failed to read
/// * Report write errors
pub fn execute_summarize(args: &SummarizeArgs) -> Result<Summary> {
    let start_time = Instant::now();

    validate_args(args)?;

    let filters = FilterSet::from_text(
        args.source.as_deref(),
        args.destination.as_deref(),
        args.host.as_deref(),
    )
    .context("Invalid filter configuration")?;

    if filters.is_empty() {
        debug!("No address filters active");
    } else {
        info!("Filters: {:?}", ReportFilters::from(&filters));
    }

    let mut totals = Aggregator::new();
    let mut stats = RunStats::default();

    for input in &args.inputs {
        let (partial, partial_stats) = summarize_file(input, &filters);
        totals.merge(partial);
        stats.merge(&partial_stats);
    }

    if stats.inputs_read == 0 {
        anyhow::bail!("None of the {} input(s) could be read", args.inputs.len());
    }

    info!("{}", stats.summary());

    let who_is = top_n(totals.requests(), args.top);
    let i_am = top_n(totals.responses(), args.top);

    let summary = Summary {
        aggregator: totals,
        stats,
        who_is,
        i_am,
    };

    if args.print_tables {
        println!("{}", format_who_is_table(&summary.who_is, args.top));
        println!("{}", format_i_am_table(&summary.i_am, args.top));
    }

    if let Some(path) = &args.output_json {
        let report = build_report(args, &filters, &summary);
        write_report(&report, path).context("Failed to write report JSON")?;
        info!("✓ Report written to: {}", path.display());
    }

    info!(
        "Summary completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(summary)
}

/// Summarize one trace file into its own partial tables
///
/// **Public** - an unreadable file is logged and counted, never fatal
pub fn summarize_file(path: &Path, filters: &FilterSet) -> (Aggregator, RunStats) {
    info!("Reading trace: {}", path.display());

    match TraceReader::open(path) {
        Ok(reader) => summarize_messages(&path.display().to_string(), reader, filters),
        Err(e) => {
            error!("Cannot open {}: {}", path.display(), e);
            let stats = RunStats {
                inputs_failed: 1,
                ..Default::default()
            };
            (Aggregator::new(), stats)
        }
    }
}

/// Run a stream of decoded messages through the filters and tables
///
/// **Public** - the core loop, independent of where messages come from
///
/// Record-level errors are skipped with a warning. An I/O error abandons the
/// rest of the stream; counts gathered before it are kept. Log lines number
/// entries in stream order; `TraceReader` logs the file line at debug level.
pub fn summarize_messages<I>(name: &str, messages: I, filters: &FilterSet) -> (Aggregator, RunStats)
where
    I: IntoIterator<Item = Result<Message, ParseError>>,
{
    let mut aggregator = Aggregator::new();
    let mut stats = RunStats::default();
    let mut failed = false;

    for (index, item) in messages.into_iter().enumerate() {
        match item {
            Ok(msg) => {
                let verdict = filters.verdict(&msg);
                if verdict == FilterVerdict::Accepted {
                    aggregator.observe(&msg);
                } else {
                    trace!("{}: entry #{} - {}", name, index + 1, verdict.as_str());
                }
                stats.record_message(msg.kind(), verdict);
            }
            Err(e) if e.is_record_level() => {
                warn!("{}: skipping entry #{}: {}", name, index + 1, e);
                stats.malformed += 1;
            }
            Err(e) => {
                error!("{}: read failed, abandoning input: {}", name, e);
                failed = true;
                break;
            }
        }
    }

    if failed {
        stats.inputs_failed += 1;
    } else {
        stats.inputs_read += 1;
    }

    debug!(
        "{}: {} who-is keys, {} i-am keys",
        name,
        aggregator.requests().len(),
        aggregator.responses().len()
    );

    (aggregator, stats)
}

/// Assemble the JSON report for a finished run
pub fn build_report(args: &SummarizeArgs, filters: &FilterSet, summary: &Summary) -> Report {
    Report {
        version: SCHEMA_VERSION.to_string(),
        generated_at: chrono::Utc::now().to_rfc3339(),
        inputs: args
            .inputs
            .iter()
            .map(|p| p.display().to_string())
            .collect(),
        filters: ReportFilters::from(filters),
        stats: summary.stats.clone(),
        who_is: summary.who_is.iter().map(Into::into).collect(),
        i_am: summary.i_am.iter().map(Into::into).collect(),
    }
}

/// Validate summarize arguments
///
/// **Public** - can be called before execute_summarize for early validation
pub fn validate_args(args: &SummarizeArgs) -> Result<()> {
    if args.inputs.is_empty() {
        anyhow::bail!("At least one input trace is required");
    }

    if args.top == 0 {
        anyhow::bail!("top must be greater than 0");
    }

    if args.top > MAX_TOP_N {
        anyhow::bail!("top is too large (max {})", MAX_TOP_N);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::Address;
    use std::io;
    use std::path::PathBuf;

    fn who_is(source: Address) -> Result<Message, ParseError> {
        Ok(Message::DiscoveryRequest {
            source,
            destination: Address::GlobalBroadcast,
            range_low: Some(1),
            range_high: Some(9),
        })
    }

    #[test]
    fn test_validate_args_valid() {
        let args = SummarizeArgs {
            inputs: vec![PathBuf::from("trace.jsonl")],
            ..Default::default()
        };

        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_no_inputs() {
        assert!(validate_args(&SummarizeArgs::default()).is_err());
    }

    #[test]
    fn test_validate_args_top_bounds() {
        let zero = SummarizeArgs {
            inputs: vec![PathBuf::from("trace.jsonl")],
            top: 0,
            ..Default::default()
        };
        let huge = SummarizeArgs {
            top: 2000,
            ..zero.clone()
        };

        assert!(validate_args(&zero).is_err());
        assert!(validate_args(&huge).is_err());
    }

    #[test]
    fn test_malformed_records_are_skipped() {
        let messages = vec![
            who_is(Address::local_station([1])),
            Err(ParseError::MalformedRecord("i-am without a device identifier".to_string())),
            who_is(Address::local_station([1])),
        ];

        let (agg, stats) = summarize_messages("inline", messages, &FilterSet::default());

        assert_eq!(agg.requests().total(), 2);
        assert_eq!(stats.malformed, 1);
        assert_eq!(stats.records, 2);
        assert_eq!(stats.inputs_read, 1);
    }

    #[test]
    fn test_io_error_abandons_input_but_keeps_counts() {
        let messages = vec![
            who_is(Address::local_station([1])),
            Err(ParseError::IoError(io::Error::new(io::ErrorKind::Other, "disk gone"))),
            who_is(Address::local_station([2])),
        ];

        let (agg, stats) = summarize_messages("inline", messages, &FilterSet::default());

        assert_eq!(agg.requests().total(), 1);
        assert_eq!(stats.inputs_failed, 1);
        assert_eq!(stats.inputs_read, 0);
    }

    #[test]
    fn test_filtered_messages_not_counted() {
        let filters = FilterSet::new(Some(Address::local_station([1])), None, None).unwrap();
        let messages = vec![
            who_is(Address::local_station([1])),
            who_is(Address::local_station([2])),
        ];

        let (agg, stats) = summarize_messages("inline", messages, &filters);

        assert_eq!(agg.requests().len(), 1);
        assert_eq!(stats.filtered_out, 1);
        assert_eq!(stats.who_is, 1);
    }

    #[test]
    fn test_invalid_filter_aborts_run() {
        let args = SummarizeArgs {
            inputs: vec![PathBuf::from("trace.jsonl")],
            source: Some("null".to_string()),
            ..Default::default()
        };

        assert!(execute_summarize(&args).is_err());
    }
}
