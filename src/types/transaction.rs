//! Transaction-related types for the ledger
//!
//! This module defines the records kept in the append-only transaction log.

use super::account::AccountId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Transaction identifier
///
/// Assigned sequentially starting at 1, never reused.
pub type TransactionId = u32;

/// Kinds of balance-changing events recorded in the log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionKind {
    /// Credit of the deposited amount
    Deposit,

    /// Debit of the withdrawn amount (recorded as a negative amount)
    Withdraw,

    /// One leg of a transfer
    ///
    /// A transfer produces two records: a negative one on the source account
    /// followed by a positive one on the destination account.
    Transfer,
}

impl TransactionKind {
    /// Upper-case label used in console output and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "DEPOSIT",
            TransactionKind::Withdraw => "WITHDRAW",
            TransactionKind::Transfer => "TRANSFER",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single immutable entry in the transaction log
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Sequential transaction identifier
    pub id: TransactionId,

    /// The account whose balance this entry changed
    pub account: AccountId,

    /// Signed amount: positive for credits, negative for debits
    pub amount: Decimal,

    /// What produced this entry
    pub kind: TransactionKind,

    /// Capture time, set once when the entry is appended
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Create a log entry stamped with the current time
    pub fn new(
        id: TransactionId,
        account: AccountId,
        amount: Decimal,
        kind: TransactionKind,
    ) -> Self {
        Transaction {
            id,
            account,
            amount,
            kind,
            timestamp: Utc::now(),
        }
    }
}
