//! Rust Ledger Service Library
//! # Overview
//!
//! This library provides an in-memory ledger of users, accounts and
//! transactions, driven either by an interactive console menu or by a batch
//! CSV script.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (User, Account, Transaction, LedgerError, etc.)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - Orchestration of every ledger operation
//!   - [`core::user_registry`] - Registration and login
//!   - [`core::account_manager`] - Account state and balance operations
//!   - [`core::transaction_log`] - Append-only transaction history
//!   - [`core::shared`] - A lock-guarded ledger handle for several threads
//! - [`io`] - Script parsing, operand parsing and report output
//! - [`console`] - The interactive menu session
//! - [`strategy`] - Runtime selection of the interactive or batch frontend
//! - [`logging`] - Tracing subscriber setup
//!
//! # Operations
//!
//! - **Register / Login**: unique usernames, password checked on login
//! - **Create account**: a zero-balance account for a user
//! - **Deposit**: credit an account
//! - **Withdraw**: debit an account (requires sufficient balance)
//! - **Transfer**: debit one account and credit another as one step
//! - **Check balance / history**: read an account's state and its records
//!
//! # Invariants
//!
//! Every balance change appends a record to the transaction log, so an
//! account's balance always equals the sum of its records' amounts. A
//! rejected operation changes nothing.

// Module declarations
pub mod cli;
pub mod console;
pub mod core;
pub mod io;
pub mod logging;
pub mod strategy;
pub mod types;

pub use core::{AccountManager, Ledger, LedgerService, SharedLedger, TransactionLog, UserRegistry};
pub use io::{write_balances_csv, write_transactions_csv};
pub use types::{
    Account, AccountId, LedgerCommand, LedgerError, Transaction, TransactionId, TransactionKind,
    User, UserId,
};
