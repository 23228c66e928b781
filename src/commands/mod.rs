//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod summarize;
pub mod utils;
pub mod validate;

// Re-export main command functions
pub use models::SummarizeArgs;
pub use summarize::{execute_summarize, summarize_file, summarize_messages, validate_args, Summary};
pub use utils::{display_schema, display_version};
pub use validate::validate_trace_file;
