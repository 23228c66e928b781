//! Validate command: check that a decoded trace file is usable.

use crate::aggregator::RunStats;
use crate::commands::summarize::summarize_messages;
use crate::filter::FilterSet;
use crate::parser::TraceReader;
use anyhow::{Context, Result};
use std::path::Path;

/// Read a trace end to end without filters and report what it contains
///
/// **Public** - called from main.rs
///
/// # Errors
/// * The file cannot be opened or breaks off mid-read
pub fn validate_trace_file(file_path: &Path) -> Result<RunStats> {
    println!("Validating trace: {}", file_path.display());

    let reader = TraceReader::open(file_path)
        .with_context(|| format!("Failed to open trace {}", file_path.display()))?;

    let name = reader.name().to_string();
    let (_, stats) = summarize_messages(&name, reader, &FilterSet::default());

    if stats.inputs_failed > 0 {
        anyhow::bail!("Trace {} could not be read to the end", file_path.display());
    }

    if stats.malformed == 0 {
        println!("✓ Valid trace");
    } else {
        println!("! Trace has {} malformed record(s)", stats.malformed);
    }
    println!("  Records: {}", stats.records);
    println!("  Who-Is:  {}", stats.who_is);
    println!("  I-Am:    {}", stats.i_am);
    println!("  Other:   {}", stats.other);

    Ok(stats)
}
