//! Streaming reader for decoded trace files.
//!
//! Input is JSON Lines: one record object per line. Blank lines and lines
//! starting with `#` are ignored. Records are decoded lazily, one per
//! `next()` call, so arbitrarily large traces are read in constant memory.

use super::schema::{Message, TraceRecord};
use crate::utils::error::ParseError;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Lazy, single-pass iterator over the messages of one input
///
/// **Public** - yields `Err` for a bad record (including one that is not
/// valid UTF-8) and keeps going; after an I/O error it yields that error
/// once and then ends.
pub struct TraceReader<R> {
    name: String,
    reader: R,
    buf: Vec<u8>,
    line_number: usize,
    finished: bool,
}

impl TraceReader<BufReader<File>> {
    /// Open a trace file
    ///
    /// # Errors
    /// * `ParseError::IoError` - the file cannot be opened
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let path = path.as_ref();
        debug!("Opening trace: {}", path.display());

        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file), path.display().to_string()))
    }
}

impl<R: BufRead> TraceReader<R> {
    /// Wrap any buffered reader; `name` is used in log messages
    pub fn new(reader: R, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reader,
            buf: Vec::new(),
            line_number: 0,
            finished: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Line number of the record most recently returned
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<R: BufRead> Iterator for TraceReader<R> {
    type Item = Result<Message, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => {
                    self.finished = true;
                    return None;
                }
                Ok(_) => {}
                Err(e) => {
                    self.finished = true;
                    return Some(Err(ParseError::IoError(e)));
                }
            }
            self.line_number += 1;

            // Decoded per line; a bad encoding only affects this record
            let line = match std::str::from_utf8(&self.buf) {
                Ok(line) => line.trim(),
                Err(e) => {
                    debug!("{}: line {} is not valid UTF-8", self.name, self.line_number);
                    return Some(Err(ParseError::InvalidEncoding(e)));
                }
            };
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let result = parse_record_line(line);
            if let Err(e) = &result {
                debug!("{}: line {}: {}", self.name, self.line_number, e);
            }
            return Some(result);
        }
    }
}

/// Decode one JSON line into a message
///
/// **Public** - exposed for decoders that hand over single records
pub fn parse_record_line(line: &str) -> Result<Message, ParseError> {
    let record: TraceRecord = serde_json::from_str(line)?;
    Message::try_from(record)
}
