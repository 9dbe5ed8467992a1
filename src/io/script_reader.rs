//! Batch script reader with iterator interface
//!
//! Provides a streaming iterator over ledger commands from a CSV script.
//! Delegates format concerns to the csv_format module.
//!
//! # Design
//!
//! The ScriptReader reads one CSV row at a time, deserializes it against the
//! script header and converts it with `convert_csv_command`. The whole script
//! is never loaded into memory.
//!
//! ```no_run
//! use rust_ledger_service::io::script_reader::ScriptReader;
//! use std::fs::File;
//!
//! let reader = ScriptReader::new(File::open("script.csv").unwrap()).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(command) => println!("Replaying: {:?}", command),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - An unreadable header is returned from `new()`
//! - Individual row errors are yielded as Err variants carrying the line number
//! - An I/O error while reading is yielded as `IoError` and ends the iteration

use crate::io::csv_format::{convert_csv_command, CsvCommand};
use crate::types::{LedgerCommand, LedgerError};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::io::Read;

/// Streaming reader over the commands in a batch script
#[derive(Debug)]
pub struct ScriptReader<R> {
    reader: csv::Reader<R>,
    headers: StringRecord,
    finished: bool,
}

impl<R: Read> ScriptReader<R> {
    /// Wrap a reader holding script text
    ///
    /// The CSV reader is configured to:
    /// - Trim whitespace from header names only; operand columns are trimmed
    ///   during conversion so passwords keep their exact text
    /// - Allow rows shorter than the header (trailing operands omitted)
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the header row cannot be read.
    pub fn new(source: R) -> Result<Self, LedgerError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::Headers)
            .flexible(true)
            .from_reader(source);
        let headers = reader.headers().map_err(read_error)?.clone();

        Ok(Self {
            reader,
            headers,
            finished: false,
        })
    }
}

impl<R: Read> Iterator for ScriptReader<R> {
    type Item = Result<LedgerCommand, LedgerError>;

    /// Get the next command from the script
    ///
    /// # Returns
    ///
    /// * `Some(Ok(LedgerCommand))` - Successfully parsed row
    /// * `Some(Err(LedgerError))` - Parse or conversion error for this row
    /// * `None` - End of script reached
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let mut record = StringRecord::new();
        match self.reader.read_record(&mut record) {
            Ok(false) => {
                self.finished = true;
                None
            }
            Ok(true) => {
                let line = record.position().map(|pos| pos.line());
                let parsed = record
                    .deserialize::<CsvCommand>(Some(&self.headers))
                    .map_err(|e| LedgerError::ParseError {
                        line,
                        message: e.to_string(),
                    })
                    .and_then(|csv_command| convert_csv_command(csv_command, line));
                Some(parsed)
            }
            Err(e) => {
                let error = read_error(e);
                if matches!(error, LedgerError::IoError { .. }) {
                    self.finished = true;
                }
                Some(Err(error))
            }
        }
    }
}

/// I/O failures stay `IoError`; everything else is a parse error
fn read_error(error: csv::Error) -> LedgerError {
    if error.is_io_error() {
        LedgerError::IoError {
            message: error.to_string(),
        }
    } else {
        error.into()
    }
}
