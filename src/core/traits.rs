//! Core trait for ledger operations
//!
//! This module defines the boundary that frontends talk to. Both the
//! single-threaded [`Ledger`](crate::core::Ledger) and the lock-guarded
//! [`SharedLedger`](crate::core::SharedLedger) implement it, so the console and
//! batch frontends work with either.

use crate::types::{
    Account, AccountId, LedgerCommand, LedgerError, Transaction, User, UserId,
};
use rust_decimal::Decimal;

/// Trait for operating the ledger
///
/// Every mutating operation validates before it changes anything: on `Err`
/// the users, accounts, transaction log and id counters are untouched.
pub trait LedgerService {
    /// Register a new user with a unique username
    fn register_user(&mut self, username: &str, password: &str) -> Result<User, LedgerError>;

    /// Look up a user by username and check the password
    fn login_user(&self, username: &str, password: &str) -> Result<User, LedgerError>;

    /// Open a zero-balance account for `owner`
    ///
    /// `owner` is not checked against registered users.
    fn create_account(&mut self, owner: UserId) -> Account;

    /// Credit `amount` to an account and record a deposit
    fn deposit(&mut self, account: AccountId, amount: Decimal) -> Result<(), LedgerError>;

    /// Debit `amount` from an account and record a withdrawal
    fn withdraw(&mut self, account: AccountId, amount: Decimal) -> Result<(), LedgerError>;

    /// Move `amount` from one account to another, recording a debit then a credit
    fn transfer(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: Decimal,
    ) -> Result<(), LedgerError>;

    /// All records for an account, oldest first
    ///
    /// Unknown accounts yield an empty list.
    fn transaction_history(&self, account: AccountId) -> Vec<Transaction>;

    /// Current balance of an account
    fn check_balance(&self, account: AccountId) -> Result<Decimal, LedgerError>;

    /// Accounts opened for `owner`, sorted by id
    fn accounts_owned_by(&self, owner: UserId) -> Vec<Account>;

    /// Every account, sorted by id
    fn accounts(&self) -> Vec<Account>;

    /// The whole transaction log in insertion order
    fn transactions(&self) -> Vec<Transaction>;

    /// Apply a single command
    ///
    /// Routes the command to the matching operation. Results that carry a
    /// value (the new user, the opened account) are dropped; reports read
    /// the resulting state back through the query methods.
    fn apply(&mut self, command: LedgerCommand) -> Result<(), LedgerError> {
        match command {
            LedgerCommand::Register { username, password } => {
                self.register_user(&username, &password).map(|_| ())
            }
            LedgerCommand::Login { username, password } => {
                self.login_user(&username, &password).map(|_| ())
            }
            LedgerCommand::OpenAccount { owner } => {
                self.create_account(owner);
                Ok(())
            }
            LedgerCommand::Deposit { account, amount } => self.deposit(account, amount),
            LedgerCommand::Withdraw { account, amount } => self.withdraw(account, amount),
            LedgerCommand::Transfer { from, to, amount } => self.transfer(from, to, amount),
        }
    }
}
