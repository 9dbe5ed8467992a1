//! Core business logic module
//!
//! This module contains the bookkeeping components:
//! - `traits` - The `LedgerService` boundary the frontends call
//! - `ledger` - Orchestration of users, accounts and the log
//! - `user_registry` - Registration and login
//! - `account_manager` - Account state and balance operations
//! - `transaction_log` - Append-only transaction history
//! - `shared` - Lock-guarded handle for use from several threads

pub mod account_manager;
pub mod ledger;
pub mod shared;
pub mod traits;
pub mod transaction_log;
pub mod user_registry;

pub use account_manager::AccountManager;
pub use ledger::Ledger;
pub use shared::SharedLedger;
pub use traits::LedgerService;
pub use transaction_log::TransactionLog;
pub use user_registry::UserRegistry;
