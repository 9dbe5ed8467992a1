//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `user`: Registered users and their identifiers
//! - `account`: Account-related types
//! - `transaction`: Transaction log records and identifiers
//! - `command`: Ledger commands replayed by the batch frontend
//! - `error`: Error types for the ledger

pub mod account;
pub mod command;
pub mod error;
pub mod transaction;
pub mod user;

pub use account::{Account, AccountId};
pub use command::LedgerCommand;
pub use error::LedgerError;
pub use transaction::{Transaction, TransactionId, TransactionKind};
pub use user::{User, UserId};
