//! Decoded trace input.
//!
//! This module handles:
//! - The decoded message model (Who-Is, I-Am, everything else)
//! - Converting raw decoder records into messages
//! - Streaming records out of trace files

pub mod schema;
pub mod trace_reader;

// Re-export main types
pub use schema::{DeviceIdentifier, Message, MessageKind, TraceRecord};
pub use trace_reader::{parse_record_line, TraceReader};
