//! Account management module
//!
//! This module provides the `AccountManager` struct which maintains the state
//! of all accounts and provides operations for changing their balances.
//!
//! The AccountManager is responsible for:
//! - Opening accounts with sequential identifiers
//! - Crediting and debiting balances with checked arithmetic
//! - Rejecting debits that would take a balance below zero
//! - Providing sorted account listings for output
//!
//! It knows nothing about the transaction log. The ledger records a log entry
//! after each balance change succeeds here.

use crate::types::{Account, AccountId, LedgerError, UserId};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Manages all accounts and their balances
pub struct AccountManager {
    /// Map of account IDs to account states
    accounts: HashMap<AccountId, Account>,

    /// Identifier handed to the next opened account
    next_id: AccountId,
}

impl AccountManager {
    /// Create a new AccountManager with no accounts
    ///
    /// The first account opened gets id 1.
    pub fn new() -> Self {
        AccountManager {
            accounts: HashMap::new(),
            next_id: 1,
        }
    }

    /// Open a zero-balance account for `owner`
    ///
    /// # Returns
    ///
    /// A copy of the newly stored account
    pub fn open(&mut self, owner: UserId) -> Account {
        let account = Account::new(self.next_id, owner);
        self.next_id += 1;
        self.accounts.insert(account.id, account.clone());
        account
    }

    /// Get an account by id
    pub fn get(&self, id: AccountId) -> Option<&Account> {
        self.accounts.get(&id)
    }

    /// Current balance of an account
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if no such account exists.
    pub fn balance(&self, id: AccountId) -> Result<Decimal, LedgerError> {
        self.get(id)
            .map(|account| account.balance)
            .ok_or_else(|| LedgerError::account_not_found(id))
    }

    /// Get all accounts sorted by account ID
    pub fn get_all_accounts(&self) -> Vec<&Account> {
        let mut accounts: Vec<&Account> = self.accounts.values().collect();
        accounts.sort_by_key(|account| account.id);
        accounts
    }

    /// Get the accounts opened for `owner`, sorted by account ID
    pub fn owned_by(&self, owner: UserId) -> Vec<&Account> {
        let mut accounts: Vec<&Account> = self
            .accounts
            .values()
            .filter(|account| account.owner == owner)
            .collect();
        accounts.sort_by_key(|account| account.id);
        accounts
    }

    /// Credit an account
    ///
    /// Adds `amount` to the balance. The amount is not required to be
    /// positive; a negative credit lowers the balance without a floor check.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The account does not exist
    /// - Adding the amount would overflow
    pub fn credit(&mut self, id: AccountId, amount: Decimal) -> Result<(), LedgerError> {
        let account = self
            .accounts
            .get_mut(&id)
            .ok_or_else(|| LedgerError::account_not_found(id))?;

        account.balance = account
            .balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("deposit", id))?;

        Ok(())
    }

    /// Debit an account
    ///
    /// Subtracts `amount` from the balance after checking that the balance
    /// covers it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The account does not exist
    /// - The balance is lower than `amount`
    /// - Subtracting the amount would overflow
    pub fn debit(&mut self, id: AccountId, amount: Decimal) -> Result<(), LedgerError> {
        let account = self
            .accounts
            .get_mut(&id)
            .ok_or_else(|| LedgerError::account_not_found(id))?;

        if !account.covers(amount) {
            return Err(LedgerError::insufficient_balance(
                id,
                account.balance,
                amount,
            ));
        }

        account.balance = account
            .balance
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("withdrawal", id))?;

        Ok(())
    }

    /// Move funds between two accounts
    ///
    /// Both new balances are computed before either account is touched, so a
    /// rejected transfer leaves both sides unchanged. Moving funds from an
    /// account to itself is allowed and leaves the balance as it was.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either account does not exist (the source is checked first)
    /// - The source balance is lower than `amount`
    /// - Either side of the move would overflow
    pub fn transfer(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        let source = self
            .get(from)
            .ok_or_else(|| LedgerError::account_not_found(from))?;
        let destination = self
            .get(to)
            .ok_or_else(|| LedgerError::account_not_found(to))?;

        if !source.covers(amount) {
            return Err(LedgerError::insufficient_balance(
                from,
                source.balance,
                amount,
            ));
        }

        let new_source = source
            .balance
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("transfer", from))?;

        if from == to {
            // Debit and credit cancel out; only the overflow check matters.
            new_source
                .checked_add(amount)
                .ok_or_else(|| LedgerError::arithmetic_overflow("transfer", to))?;
            return Ok(());
        }

        let new_destination = destination
            .balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("transfer", to))?;

        // Both lookups succeeded above
        if let Some(account) = self.accounts.get_mut(&from) {
            account.balance = new_source;
        }
        if let Some(account) = self.accounts.get_mut(&to) {
            account.balance = new_destination;
        }

        Ok(())
    }
}

impl Default for AccountManager {
    fn default() -> Self {
        Self::new()
    }
}
