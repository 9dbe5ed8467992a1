//! Append-only transaction log
//!
//! This module provides the TransactionLog component that records every
//! balance change as an immutable [`Transaction`]. Entries are kept in the
//! order they were appended and are never changed or removed.
//!
//! # Ordering
//!
//! Identifiers come from the log's own counter, so the id order and the
//! insertion order are the same. History queries return entries in that order.

use crate::types::{AccountId, Transaction, TransactionId, TransactionKind};
use rust_decimal::Decimal;

/// Append-only list of transaction records
pub struct TransactionLog {
    /// Entries in insertion order
    entries: Vec<Transaction>,

    /// Identifier handed to the next entry
    next_id: TransactionId,
}

impl TransactionLog {
    /// Create an empty log whose first entry gets id 1
    pub fn new() -> Self {
        TransactionLog {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a record stamped with the current time
    ///
    /// # Arguments
    ///
    /// * `account` - The account whose balance changed
    /// * `amount` - Signed amount of the change
    /// * `kind` - What produced the change
    ///
    /// # Returns
    ///
    /// The identifier assigned to the new record
    pub fn append(
        &mut self,
        account: AccountId,
        amount: Decimal,
        kind: TransactionKind,
    ) -> TransactionId {
        let id = self.next_id;
        self.next_id += 1;
        self.entries
            .push(Transaction::new(id, account, amount, kind));
        id
    }

    /// All records for an account, oldest first
    ///
    /// An account with no records (or no such account) yields an empty list.
    pub fn history(&self, account: AccountId) -> Vec<Transaction> {
        self.entries
            .iter()
            .filter(|tx| tx.account == account)
            .cloned()
            .collect()
    }

    /// Sum of the signed amounts recorded for an account
    pub fn net_amount(&self, account: AccountId) -> Decimal {
        self.entries
            .iter()
            .filter(|tx| tx.account == account)
            .map(|tx| tx.amount)
            .sum()
    }

    /// The whole log in insertion order
    pub fn entries(&self) -> &[Transaction] {
        &self.entries
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TransactionLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_retrieve() {
        let mut log = TransactionLog::new();

        let id = log.append(1, Decimal::new(10000, 2), TransactionKind::Deposit);

        assert_eq!(id, 1);
        let history = log.history(1);
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].id, 1);
        assert_eq!(history[0].account, 1);
        assert_eq!(history[0].amount, Decimal::new(10000, 2));
        assert_eq!(history[0].kind, TransactionKind::Deposit);
    }

    #[test]
    fn test_ids_increase_across_accounts() {
        let mut log = TransactionLog::new();

        let ids: Vec<TransactionId> = (1..=5)
            .map(|account| log.append(account, Decimal::ONE, TransactionKind::Deposit))
            .collect();

        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(log.len(), 5);
    }

    #[test]
    fn test_history_keeps_insertion_order_and_filters_account() {
        let mut log = TransactionLog::new();
        log.append(1, Decimal::new(100, 0), TransactionKind::Deposit);
        log.append(2, Decimal::new(7, 0), TransactionKind::Deposit);
        log.append(1, Decimal::new(-40, 0), TransactionKind::Withdraw);
        log.append(1, Decimal::new(-10, 0), TransactionKind::Transfer);

        let history = log.history(1);

        let amounts: Vec<Decimal> = history.iter().map(|tx| tx.amount).collect();
        assert_eq!(
            amounts,
            vec![Decimal::new(100, 0), Decimal::new(-40, 0), Decimal::new(-10, 0)]
        );
        let ids: Vec<TransactionId> = history.iter().map(|tx| tx.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_history_for_unknown_account_is_empty() {
        let mut log = TransactionLog::new();
        log.append(1, Decimal::ONE, TransactionKind::Deposit);

        assert!(log.history(99).is_empty());
        assert!(TransactionLog::new().is_empty());
    }

    #[test]
    fn test_net_amount_sums_signed_entries() {
        let mut log = TransactionLog::new();
        log.append(1, Decimal::new(100, 0), TransactionKind::Deposit);
        log.append(1, Decimal::new(-25, 0), TransactionKind::Withdraw);
        log.append(2, Decimal::new(25, 0), TransactionKind::Transfer);

        assert_eq!(log.net_amount(1), Decimal::new(75, 0));
        assert_eq!(log.net_amount(2), Decimal::new(25, 0));
        assert_eq!(log.net_amount(3), Decimal::ZERO);
    }

    #[test]
    fn test_timestamps_do_not_go_backwards() {
        let mut log = TransactionLog::new();
        for _ in 0..10 {
            log.append(1, Decimal::ONE, TransactionKind::Deposit);
        }

        let entries = log.entries();
        assert!(entries
            .windows(2)
            .all(|pair| pair[0].timestamp <= pair[1].timestamp));
    }
}
