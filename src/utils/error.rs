//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while parsing a textual address
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("Empty address")]
    Empty,

    #[error("Invalid network number: {0}")]
    InvalidNetwork(String),

    #[error("Invalid station address: {0}")]
    InvalidStation(String),
}

/// Errors raised while building address filters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Invalid filter mode: {0} cannot be used as a match pattern")]
    InvalidFilterMode(String),

    #[error("Invalid {role} filter: {source}")]
    InvalidAddress {
        role: &'static str,
        #[source]
        source: AddressError,
    },
}

/// Errors that can occur while reading decoded trace records
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("Invalid address in record: {0}")]
    InvalidAddress(#[from] AddressError),

    #[error("Record is not valid UTF-8: {0}")]
    InvalidEncoding(#[from] std::str::Utf8Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ParseError {
    /// Whether this error only affects the current record
    ///
    /// **Public** - readers skip recoverable errors and abandon the input otherwise
    pub fn is_record_level(&self) -> bool {
        !matches!(self, ParseError::IoError(_))
    }
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
