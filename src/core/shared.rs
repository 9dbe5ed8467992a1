//! Thread-safe ledger handle
//!
//! `SharedLedger` wraps a [`Ledger`] in `Arc<Mutex<_>>`. Every operation takes
//! the single lock for its whole duration, so a transfer touching two accounts
//! never needs to order per-account locks and opposite-direction transfers
//! cannot deadlock.
//!
//! # Poisoning
//!
//! Ledger operations validate before they mutate, so a panic while the lock
//! is held cannot leave half-applied state behind. A poisoned lock is
//! therefore recovered instead of propagated.

use crate::core::ledger::Ledger;
use crate::core::traits::LedgerService;
use crate::types::{Account, AccountId, LedgerError, Transaction, User, UserId};
use rust_decimal::Decimal;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle to one ledger shared between threads
#[derive(Clone, Default)]
pub struct SharedLedger {
    inner: Arc<Mutex<Ledger>>,
}

impl SharedLedger {
    /// Create a handle around an empty ledger
    pub fn new() -> Self {
        Self::from_ledger(Ledger::new())
    }

    /// Share an existing ledger
    pub fn from_ledger(ledger: Ledger) -> Self {
        SharedLedger {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    /// Run `f` with exclusive access to the ledger
    ///
    /// Lets callers group several operations into one critical section.
    pub fn with<R>(&self, f: impl FnOnce(&mut Ledger) -> R) -> R {
        f(&mut *self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, Ledger> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LedgerService for SharedLedger {
    fn register_user(&mut self, username: &str, password: &str) -> Result<User, LedgerError> {
        self.lock().register_user(username, password)
    }

    fn login_user(&self, username: &str, password: &str) -> Result<User, LedgerError> {
        self.lock().login_user(username, password)
    }

    fn create_account(&mut self, owner: UserId) -> Account {
        self.lock().create_account(owner)
    }

    fn deposit(&mut self, account: AccountId, amount: Decimal) -> Result<(), LedgerError> {
        self.lock().deposit(account, amount)
    }

    fn withdraw(&mut self, account: AccountId, amount: Decimal) -> Result<(), LedgerError> {
        self.lock().withdraw(account, amount)
    }

    fn transfer(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        self.lock().transfer(from, to, amount)
    }

    fn transaction_history(&self, account: AccountId) -> Vec<Transaction> {
        self.lock().transaction_history(account)
    }

    fn check_balance(&self, account: AccountId) -> Result<Decimal, LedgerError> {
        self.lock().check_balance(account)
    }

    fn accounts_owned_by(&self, owner: UserId) -> Vec<Account> {
        self.lock().accounts_owned_by(owner)
    }

    fn accounts(&self) -> Vec<Account> {
        self.lock().accounts()
    }

    fn transactions(&self) -> Vec<Transaction> {
        self.lock().transactions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn test_shared_ledger_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SharedLedger>();
    }

    #[test]
    fn test_clones_see_the_same_ledger() {
        let mut first = SharedLedger::new();
        let second = first.clone();

        let account = first.create_account(1);
        first.deposit(account.id, Decimal::new(25, 0)).unwrap();

        assert_eq!(
            second.check_balance(account.id).unwrap(),
            Decimal::new(25, 0)
        );
    }

    #[test]
    fn test_opposite_direction_transfers_conserve_money() {
        let mut ledger = SharedLedger::new();
        let a = ledger.create_account(1).id;
        let b = ledger.create_account(2).id;
        ledger.deposit(a, Decimal::new(1000, 0)).unwrap();
        ledger.deposit(b, Decimal::new(1000, 0)).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let mut ledger = ledger.clone();
                thread::spawn(move || {
                    let (from, to) = if worker % 2 == 0 { (a, b) } else { (b, a) };
                    for _ in 0..200 {
                        // Rejections are fine; they just must not corrupt state
                        let _ = ledger.transfer(from, to, Decimal::new(7, 0));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let total = ledger.check_balance(a).unwrap() + ledger.check_balance(b).unwrap();
        assert_eq!(total, Decimal::new(2000, 0));

        ledger.with(|inner| {
            for account in [a, b] {
                assert_eq!(
                    inner.check_balance(account).unwrap(),
                    inner.logged_total(account)
                );
                assert!(inner.check_balance(account).unwrap() >= Decimal::ZERO);
            }
        });
    }

    #[test]
    fn test_concurrent_registration_assigns_unique_ids() {
        let ledger = SharedLedger::new();

        let handles: Vec<_> = (0..4)
            .map(|worker| {
                let mut ledger = ledger.clone();
                thread::spawn(move || {
                    (0..25)
                        .map(|n| {
                            ledger
                                .register_user(&format!("user-{worker}-{n}"), "pw")
                                .unwrap()
                                .id
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let ids: HashSet<UserId> = handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect();
        assert_eq!(ids.len(), 100);
        assert_eq!(ids.iter().min(), Some(&1));
        assert_eq!(ids.iter().max(), Some(&100));
    }

    #[test]
    fn test_poisoned_lock_is_recovered() {
        let mut ledger = SharedLedger::new();
        let account = ledger.create_account(1).id;
        ledger.deposit(account, Decimal::ONE).unwrap();

        let poisoner = ledger.clone();
        let _ = thread::spawn(move || {
            poisoner.with(|_| panic!("panic while holding the ledger lock"));
        })
        .join();

        assert_eq!(ledger.check_balance(account).unwrap(), Decimal::ONE);
        ledger.deposit(account, Decimal::ONE).unwrap();
        assert_eq!(ledger.check_balance(account).unwrap(), Decimal::TWO);
    }
}
