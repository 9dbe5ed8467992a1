//! Error types for the ledger
//!
//! This module defines all error types that can occur while operating the ledger
//! or driving it from one of the frontends.
//!
//! # Error Categories
//!
//! - **Ledger Errors**: Duplicate username, bad credentials, unknown account,
//!   insufficient balance. Local validation failures, never fatal.
//! - **Arithmetic Errors**: Overflow in balance calculations
//! - **Frontend Errors**: I/O failures, malformed scripts and console input

use super::account::AccountId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the ledger
///
/// Every failed operation returns one of these variants and leaves the
/// ledger exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Registration with a username that is already taken
    #[error("Username '{username}' already exists")]
    DuplicateUsername {
        /// The rejected username
        username: String,
    },

    /// Unknown username or wrong password
    ///
    /// Both cases share one variant so that callers cannot probe which
    /// usernames exist.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// No account with the given identifier
    #[error("Account {account} not found")]
    AccountNotFound {
        /// The account that was looked up
        account: AccountId,
    },

    /// Debit larger than the current balance
    ///
    /// Raised by withdrawals and by the source side of a transfer.
    #[error(
        "Insufficient balance in account {account}: balance {balance}, requested {requested}"
    )]
    InsufficientBalance {
        /// Account that would have gone negative
        account: AccountId,
        /// Balance at the time of the request
        balance: Decimal,
        /// Requested debit
        requested: Decimal,
    },

    /// Arithmetic overflow would occur
    ///
    /// The operation is rejected to keep the balance and the log consistent.
    #[error("Arithmetic overflow in {operation} for account {account}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account whose balance would overflow
        account: AccountId,
    },

    /// I/O error occurred while reading input or writing output
    ///
    /// This is a fatal error for the frontend that hit it.
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error in a batch script
    ///
    /// Recoverable: the row is skipped and replay continues.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Operand that could not be parsed
    ///
    /// Raised for menu choices, identifiers and amounts typed at the console
    /// or found in a script.
    #[error("Invalid input '{input}': expected {expected}")]
    InvalidInput {
        /// The raw text that was rejected
        input: String,
        /// What the frontend was waiting for
        expected: String,
    },

    /// Unknown operation in a batch script
    #[error("Unknown command '{op}'{}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    InvalidCommand {
        /// The unrecognized operation name
        op: String,
        /// Script line (if available)
        line: Option<u64>,
    },

    /// Script row missing an operand its operation needs
    #[error("{op} command{} requires '{field}'", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    MissingField {
        /// Operation name
        op: String,
        /// Column that was empty
        field: String,
        /// Script line (if available)
        line: Option<u64>,
    },
}

// Conversion from io::Error to LedgerError
impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to LedgerError
impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create a DuplicateUsername error
    pub fn duplicate_username(username: &str) -> Self {
        LedgerError::DuplicateUsername {
            username: username.to_string(),
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(account: AccountId) -> Self {
        LedgerError::AccountNotFound { account }
    }

    /// Create an InsufficientBalance error
    pub fn insufficient_balance(account: AccountId, balance: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientBalance {
            account,
            balance,
            requested,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: AccountId) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            account,
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(input: &str, expected: &str) -> Self {
        LedgerError::InvalidInput {
            input: input.to_string(),
            expected: expected.to_string(),
        }
    }

    /// Create an InvalidCommand error
    pub fn invalid_command(op: &str, line: Option<u64>) -> Self {
        LedgerError::InvalidCommand {
            op: op.to_string(),
            line,
        }
    }

    /// Create a MissingField error
    pub fn missing_field(op: &str, field: &str, line: Option<u64>) -> Self {
        LedgerError::MissingField {
            op: op.to_string(),
            field: field.to_string(),
            line,
        }
    }

    /// Whether this error is a ledger rule rejection rather than a frontend failure
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            LedgerError::DuplicateUsername { .. }
                | LedgerError::InvalidCredentials
                | LedgerError::AccountNotFound { .. }
                | LedgerError::InsufficientBalance { .. }
                | LedgerError::ArithmeticOverflow { .. }
        )
    }
}
