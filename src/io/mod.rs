//! I/O module
//!
//! Handles batch script parsing and report output.
//!
//! # Components
//!
//! - `operand` - Identifier and amount parsing, amount rendering
//! - `csv_format` - CSV format handling (row conversion, report serialization)
//! - `script_reader` - Streaming CSV script reader with iterator interface

pub mod csv_format;
pub mod operand;
pub mod script_reader;

pub use csv_format::{convert_csv_command, write_balances_csv, write_transactions_csv, CsvCommand};
pub use operand::{format_amount, parse_amount, parse_id};
pub use script_reader::ScriptReader;
