//! Account-related types for the ledger
//!
//! This module defines the Account structure that holds a single balance
//! owned by a user.

use super::user::UserId;
use rust_decimal::Decimal;

/// Account identifier
///
/// Assigned sequentially starting at 1, never reused.
pub type AccountId = u32;

/// Account state
///
/// An account belongs to a user and carries one balance. The balance only
/// changes through deposits, withdrawals and transfers, each of which leaves
/// a matching record in the transaction log.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Sequential account identifier
    pub id: AccountId,

    /// Owning user
    ///
    /// Recorded as given when the account is opened. The ledger does not
    /// check that a user with this id exists.
    pub owner: UserId,

    /// Current balance
    ///
    /// Always equals the sum of the signed amounts recorded for this account.
    pub balance: Decimal,
}

impl Account {
    /// Create a new account with a zero balance
    ///
    /// # Arguments
    ///
    /// * `id` - The identifier assigned to this account
    /// * `owner` - The user the account is opened for
    pub fn new(id: AccountId, owner: UserId) -> Self {
        Account {
            id,
            owner,
            balance: Decimal::ZERO,
        }
    }

    /// Whether the balance covers a debit of `amount`
    pub fn covers(&self, amount: Decimal) -> bool {
        self.balance >= amount
    }
}
