//! Output writers for summary reports.
//!
//! This module handles:
//! - JSON reports on disk
//! - Plain-text Who-Is / I-Am tables for stdout

pub mod json;
pub mod schema;
pub mod table;

use crate::utils::error::OutputError;
use log::debug;
use std::path::Path;

// Re-export main functions
pub use json::{read_report, report_to_string, write_report};
pub use schema::{IAmRow, Report, ReportFilters, WhoIsRow};
pub use table::{format_i_am_table, format_who_is_table};

/// Validate that output path is writable
///
/// **Public** - shared by the writers
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Check if we're trying to overwrite a directory
    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Parent directory will be created: {}", parent.display());
        }
    }

    Ok(())
}
