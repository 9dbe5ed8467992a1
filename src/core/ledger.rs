//! Ledger service
//!
//! This module provides the `Ledger`, which owns the user registry, the
//! accounts and the transaction log, and coordinates them for every operation.
//!
//! The ledger enforces rules such as:
//! - Usernames are unique
//! - Withdrawals and outgoing transfers never overdraw an account
//! - Every balance change leaves exactly the matching log entries, so an
//!   account's balance always equals the sum of its history
//!
//! Balances are changed first and logged only after the change succeeded.
//! Account operations validate before they mutate, so an error never leaves a
//! balance changed without its log entry.

use crate::core::account_manager::AccountManager;
use crate::core::traits::LedgerService;
use crate::core::transaction_log::TransactionLog;
use crate::core::user_registry::UserRegistry;
use crate::types::{
    Account, AccountId, LedgerError, Transaction, TransactionKind, User, UserId,
};
use rust_decimal::Decimal;
use tracing::debug;

/// In-memory ledger of users, accounts and transactions
///
/// Constructed empty; every id counter starts at 1. Dropping the ledger
/// discards all state.
pub struct Ledger {
    users: UserRegistry,
    accounts: AccountManager,
    log: TransactionLog,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Ledger {
            users: UserRegistry::new(),
            accounts: AccountManager::new(),
            log: TransactionLog::new(),
        }
    }

    /// Number of registered users
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Sum of the logged amounts for an account
    ///
    /// Matches `check_balance` for every account the ledger has touched.
    pub fn logged_total(&self, account: AccountId) -> Decimal {
        self.log.net_amount(account)
    }
}

impl LedgerService for Ledger {
    fn register_user(&mut self, username: &str, password: &str) -> Result<User, LedgerError> {
        let user = self.users.register(username, password)?;
        debug!(user = user.id, username = %user.username, "registered user");
        Ok(user)
    }

    fn login_user(&self, username: &str, password: &str) -> Result<User, LedgerError> {
        self.users.login(username, password)
    }

    fn create_account(&mut self, owner: UserId) -> Account {
        let account = self.accounts.open(owner);
        debug!(account = account.id, owner, "opened account");
        account
    }

    fn deposit(&mut self, account: AccountId, amount: Decimal) -> Result<(), LedgerError> {
        self.accounts.credit(account, amount)?;
        let tx = self.log.append(account, amount, TransactionKind::Deposit);
        debug!(tx, account, %amount, "deposit");
        Ok(())
    }

    fn withdraw(&mut self, account: AccountId, amount: Decimal) -> Result<(), LedgerError> {
        self.accounts.debit(account, amount)?;
        let tx = self.log.append(account, -amount, TransactionKind::Withdraw);
        debug!(tx, account, %amount, "withdrawal");
        Ok(())
    }

    fn transfer(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        self.accounts.transfer(from, to, amount)?;
        let debit = self.log.append(from, -amount, TransactionKind::Transfer);
        let credit = self.log.append(to, amount, TransactionKind::Transfer);
        debug!(debit, credit, from, to, %amount, "transfer");
        Ok(())
    }

    fn transaction_history(&self, account: AccountId) -> Vec<Transaction> {
        self.log.history(account)
    }

    fn check_balance(&self, account: AccountId) -> Result<Decimal, LedgerError> {
        self.accounts.balance(account)
    }

    fn accounts_owned_by(&self, owner: UserId) -> Vec<Account> {
        self.accounts.owned_by(owner).into_iter().cloned().collect()
    }

    fn accounts(&self) -> Vec<Account> {
        self.accounts
            .get_all_accounts()
            .into_iter()
            .cloned()
            .collect()
    }

    fn transactions(&self) -> Vec<Transaction> {
        self.log.entries().to_vec()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
