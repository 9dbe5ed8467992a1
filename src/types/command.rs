//! Ledger commands
//!
//! A `LedgerCommand` is one ledger operation together with its operands, as
//! read from a batch script. Queries are not commands: they do not change
//! state and are answered by the reports instead.

use super::account::AccountId;
use super::user::UserId;
use rust_decimal::Decimal;

/// A single state-changing ledger operation
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerCommand {
    /// Register a new user
    Register { username: String, password: String },

    /// Check a user's credentials
    ///
    /// Changes nothing; replayed so scripts can assert that a login works.
    Login { username: String, password: String },

    /// Open a zero-balance account for a user
    OpenAccount { owner: UserId },

    /// Credit an account
    Deposit { account: AccountId, amount: Decimal },

    /// Debit an account
    Withdraw { account: AccountId, amount: Decimal },

    /// Move funds between two accounts
    Transfer {
        from: AccountId,
        to: AccountId,
        amount: Decimal,
    },
}

impl LedgerCommand {
    /// Script name of the operation
    pub fn op_name(&self) -> &'static str {
        match self {
            LedgerCommand::Register { .. } => "register",
            LedgerCommand::Login { .. } => "login",
            LedgerCommand::OpenAccount { .. } => "open",
            LedgerCommand::Deposit { .. } => "deposit",
            LedgerCommand::Withdraw { .. } => "withdraw",
            LedgerCommand::Transfer { .. } => "transfer",
        }
    }
}
