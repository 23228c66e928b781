use crate::utils::config::DEFAULT_TOP_N;
use std::path::PathBuf;

/// Arguments for the summarize command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizeArgs {
    /// Decoded trace files, processed in order
    pub inputs: Vec<PathBuf>,

    /// Source address filter (textual form)
    pub source: Option<String>,

    /// Destination address filter (textual form)
    pub destination: Option<String>,

    /// Host filter: matches either source or destination
    pub host: Option<String>,

    /// Number of rows per table
    pub top: usize,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Print the text tables to stdout
    pub print_tables: bool,
}

impl Default for SummarizeArgs {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            source: None,
            destination: None,
            host: None,
            top: DEFAULT_TOP_N,
            output_json: None,
            print_tables: true,
        }
    }
}
