//! Who-Is / I-Am Summary CLI
//!
//! Summarizes BACnet device discovery traffic in decoded traces.
//! Prints the top Who-Is senders and the top I-Am responders.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use whois_iam_summary::commands::{
    display_schema, display_version, execute_summarize, validate_trace_file, SummarizeArgs,
};
use whois_iam_summary::utils::config::DEFAULT_TOP_N;

/// Who-Is / I-Am Summary - discovery traffic statistics for BACnet traces
#[derive(Parser, Debug)]
#[command(name = "whois-iam-summary")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Summarize Who-Is and I-Am traffic in one or more traces
    Summarize {
        /// Decoded trace files (JSON Lines)
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Only count messages whose source matches this address
        #[arg(long = "src", env = "WHOIS_SRC")]
        source: Option<String>,

        /// Only count messages whose destination matches this address
        #[arg(long = "dest", env = "WHOIS_DEST")]
        destination: Option<String>,

        /// Only count messages whose source or destination matches this address
        #[arg(long, env = "WHOIS_HOST")]
        host: Option<String>,

        /// Number of rows per table
        #[arg(short, long, default_value_t = DEFAULT_TOP_N)]
        top: usize,

        /// Output path for a JSON report (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Do not print the text tables
        #[arg(long)]
        quiet: bool,
    },

    /// Check that a decoded trace file is readable
    Validate {
        /// Path to trace file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display trace record and address formats
    Schema {
        /// Show full format details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Summarize {
            inputs,
            source,
            destination,
            host,
            top,
            output,
            quiet,
        } => {
            let args = SummarizeArgs {
                inputs,
                source,
                destination,
                host,
                top,
                output_json: output,
                print_tables: !quiet,
            };

            execute_summarize(&args)?;
        }

        Commands::Validate { file } => {
            validate_trace_file(&file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
