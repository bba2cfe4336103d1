//! Transaction-posting workflow
//!
//! This module provides the `TransactionWorkflow`, which orchestrates the
//! account store, the balance policy, and the transaction store into the
//! single user-facing operation of posting a deposit or withdrawal.
//!
//! # Pipeline
//!
//! ```text
//! post_transaction
//!     ├── AccountStore::get_by_id      (AccountNotFound / StoreUnavailable)
//!     ├── policy::decide               (InsufficientFunds / InvalidAmount)
//!     ├── AccountStore::update_balance (StoreUnavailable, nothing recorded)
//!     └── TransactionStore::append     (on failure: compensate + RecordingFailed)
//! ```
//!
//! On append failure the workflow issues one compensating
//! `update_balance` restoring the balance it read at the start, then
//! reports [`BankError::RecordingFailed`] carrying the append error and,
//! if the compensation also failed, that error as well.
//!
//! # Concurrency
//!
//! Store contracts expose no compare-and-swap, so a bare read-decide-write
//! sequence would be a lost-update race under concurrent calls against the
//! same account. The workflow serializes invocations per account with an
//! async mutex held for the whole pipeline, making same-account calls
//! linearizable. The lock also covers the compensation step, so no
//! concurrent write can land between the balance commit and a revert.

use std::sync::Arc;

use dashmap::DashMap;
use rust_decimal::Decimal;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use crate::core::policy;
use crate::core::traits::{AccountStore, TransactionStore};
use crate::types::{BankError, NewTransaction, OperationKind, Transaction};

/// Orchestrates balance mutations with a consistent transaction history
///
/// Generic over the store contracts; the workflow never touches a concrete
/// backend type. Share it across tasks by wrapping it in an `Arc`.
#[derive(Debug)]
pub struct TransactionWorkflow<A, T> {
    accounts: Arc<A>,
    transactions: Arc<T>,

    /// One async mutex per account id, created on first use
    ///
    /// Entries are never removed; the map grows with the number of distinct
    /// accounts posted to, which is bounded by the account table itself.
    account_locks: DashMap<String, Arc<Mutex<()>>>,
}

impl<A, T> TransactionWorkflow<A, T>
where
    A: AccountStore,
    T: TransactionStore,
{
    /// Create a new workflow over the given stores
    pub fn new(accounts: Arc<A>, transactions: Arc<T>) -> Self {
        Self {
            accounts,
            transactions,
            account_locks: DashMap::new(),
        }
    }

    fn lock_for(&self, account_id: &str) -> Arc<Mutex<()>> {
        self.account_locks
            .entry(account_id.to_string())
            .or_default()
            .clone()
    }

    /// Post a deposit or withdrawal against an account
    ///
    /// Reads the account, applies the balance policy, commits the new
    /// balance, and appends the transaction record. Same-account calls are
    /// serialized; calls against different accounts proceed in parallel.
    ///
    /// # Errors
    ///
    /// * [`BankError::AccountNotFound`] - no such account; nothing mutated
    /// * [`BankError::InvalidAmount`] / [`BankError::InsufficientFunds`] /
    ///   [`BankError::ArithmeticOverflow`] - policy rejection; nothing mutated
    /// * [`BankError::StoreUnavailable`] - a store call failed before the
    ///   balance commit; nothing mutated, safe for the caller to retry
    /// * [`BankError::RecordingFailed`] - the balance was committed but the
    ///   append failed; the compensation outcome is carried in the error
    pub async fn post_transaction(
        &self,
        account_id: &str,
        amount: Decimal,
        kind: OperationKind,
    ) -> Result<Transaction, BankError> {
        let lock = self.lock_for(account_id);
        let _guard = lock.lock().await;

        let account = self.accounts.get_by_id(account_id).await?;

        let new_balance = match policy::decide(account.balance, kind, amount) {
            Ok(balance) => balance,
            Err(err) => {
                warn!(account_id, %amount, %kind, %err, "operation rejected");
                return Err(err);
            }
        };

        self.accounts.update_balance(account_id, new_balance).await?;

        match self
            .transactions
            .append(NewTransaction {
                account_id: account_id.to_string(),
                amount,
                kind,
            })
            .await
        {
            Ok(transaction) => {
                info!(
                    account_id,
                    transaction_id = %transaction.id,
                    %amount,
                    %kind,
                    %new_balance,
                    "transaction posted"
                );
                Ok(transaction)
            }
            Err(append_err) => {
                error!(account_id, %append_err, "transaction append failed, compensating");
                let compensation = self
                    .accounts
                    .update_balance(account_id, account.balance)
                    .await
                    .err();
                if let Some(comp_err) = &compensation {
                    error!(
                        account_id,
                        %comp_err,
                        "compensation failed, balance and history have diverged"
                    );
                }
                Err(BankError::recording_failed(append_err, compensation))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::{MockAccountStore, MockTransactionStore};
    use crate::types::Account;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn account(id: &str, cents: i64) -> Account {
        let now = Utc::now();
        Account {
            id: id.to_string(),
            name: "Alice".to_string(),
            balance: Decimal::new(cents, 2),
            currency: "USD".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn recorded(new: NewTransaction) -> Transaction {
        let now = Utc::now();
        Transaction {
            id: "tx-1".to_string(),
            account_id: new.account_id,
            amount: new.amount,
            kind: new.kind,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_deposit_commits_balance_then_appends() {
        let mut accounts = MockAccountStore::new();
        let mut transactions = MockTransactionStore::new();

        accounts
            .expect_get_by_id()
            .with(eq("acc-1"))
            .times(1)
            .returning(|id| Ok(account(id, 5000)));
        accounts
            .expect_update_balance()
            .with(eq("acc-1"), eq(Decimal::new(7000, 2)))
            .times(1)
            .returning(|_, _| Ok(()));
        transactions
            .expect_append()
            .times(1)
            .returning(|new| Ok(recorded(new)));

        let workflow = TransactionWorkflow::new(Arc::new(accounts), Arc::new(transactions));

        let tx = workflow
            .post_transaction("acc-1", Decimal::new(2000, 2), OperationKind::Deposit)
            .await
            .unwrap();

        assert_eq!(tx.account_id, "acc-1");
        assert_eq!(tx.amount, Decimal::new(2000, 2));
        assert_eq!(tx.kind, OperationKind::Deposit);
    }

    #[tokio::test]
    async fn test_unknown_account_stops_before_any_write() {
        let mut accounts = MockAccountStore::new();
        let transactions = MockTransactionStore::new();

        accounts
            .expect_get_by_id()
            .with(eq("missing"))
            .times(1)
            .returning(|id| Err(BankError::account_not_found(id)));
        // No update_balance or append expectations: any call would panic.

        let workflow = TransactionWorkflow::new(Arc::new(accounts), Arc::new(transactions));

        let err = workflow
            .post_transaction("missing", Decimal::new(1000, 2), OperationKind::Deposit)
            .await
            .unwrap_err();

        assert_eq!(err, BankError::account_not_found("missing"));
    }

    #[tokio::test]
    async fn test_policy_rejection_leaves_stores_untouched() {
        let mut accounts = MockAccountStore::new();
        let transactions = MockTransactionStore::new();

        accounts
            .expect_get_by_id()
            .with(eq("acc-1"))
            .times(1)
            .returning(|id| Ok(account(id, 5000)));

        let workflow = TransactionWorkflow::new(Arc::new(accounts), Arc::new(transactions));

        let err = workflow
            .post_transaction("acc-1", Decimal::new(7500, 2), OperationKind::Withdrawal)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            BankError::insufficient_funds(Decimal::new(5000, 2), Decimal::new(7500, 2))
        );
    }

    #[tokio::test]
    async fn test_balance_commit_failure_records_nothing() {
        let mut accounts = MockAccountStore::new();
        let transactions = MockTransactionStore::new();

        accounts
            .expect_get_by_id()
            .with(eq("acc-1"))
            .times(1)
            .returning(|id| Ok(account(id, 5000)));
        accounts
            .expect_update_balance()
            .times(1)
            .returning(|_, _| Err(BankError::store_unavailable("connection reset")));

        let workflow = TransactionWorkflow::new(Arc::new(accounts), Arc::new(transactions));

        let err = workflow
            .post_transaction("acc-1", Decimal::new(1000, 2), OperationKind::Deposit)
            .await
            .unwrap_err();

        assert_eq!(err, BankError::store_unavailable("connection reset"));
    }

    #[tokio::test]
    async fn test_append_failure_compensates_with_prior_balance() {
        let mut accounts = MockAccountStore::new();
        let mut transactions = MockTransactionStore::new();

        accounts
            .expect_get_by_id()
            .with(eq("acc-1"))
            .times(1)
            .returning(|id| Ok(account(id, 10000)));
        // First write commits the new balance, second write reverts to the
        // balance read at the start.
        accounts
            .expect_update_balance()
            .with(eq("acc-1"), eq(Decimal::new(7000, 2)))
            .times(1)
            .returning(|_, _| Ok(()));
        accounts
            .expect_update_balance()
            .with(eq("acc-1"), eq(Decimal::new(10000, 2)))
            .times(1)
            .returning(|_, _| Ok(()));
        transactions
            .expect_append()
            .times(1)
            .returning(|_| Err(BankError::store_unavailable("append timed out")));

        let workflow = TransactionWorkflow::new(Arc::new(accounts), Arc::new(transactions));

        let err = workflow
            .post_transaction("acc-1", Decimal::new(3000, 2), OperationKind::Withdrawal)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            BankError::recording_failed(BankError::store_unavailable("append timed out"), None)
        );
    }

    #[tokio::test]
    async fn test_failed_compensation_surfaces_both_errors() {
        let mut accounts = MockAccountStore::new();
        let mut transactions = MockTransactionStore::new();

        accounts
            .expect_get_by_id()
            .with(eq("acc-1"))
            .times(1)
            .returning(|id| Ok(account(id, 10000)));
        accounts
            .expect_update_balance()
            .with(eq("acc-1"), eq(Decimal::new(7000, 2)))
            .times(1)
            .returning(|_, _| Ok(()));
        accounts
            .expect_update_balance()
            .with(eq("acc-1"), eq(Decimal::new(10000, 2)))
            .times(1)
            .returning(|_, _| Err(BankError::store_unavailable("revert timed out")));
        transactions
            .expect_append()
            .times(1)
            .returning(|_| Err(BankError::store_unavailable("append timed out")));

        let workflow = TransactionWorkflow::new(Arc::new(accounts), Arc::new(transactions));

        let err = workflow
            .post_transaction("acc-1", Decimal::new(3000, 2), OperationKind::Withdrawal)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            BankError::recording_failed(
                BankError::store_unavailable("append timed out"),
                Some(BankError::store_unavailable("revert timed out")),
            )
        );
    }

    #[tokio::test]
    async fn test_negative_amount_rejected_without_writes() {
        let mut accounts = MockAccountStore::new();
        let transactions = MockTransactionStore::new();

        accounts
            .expect_get_by_id()
            .with(eq("acc-1"))
            .times(1)
            .returning(|id| Ok(account(id, 5000)));

        let workflow = TransactionWorkflow::new(Arc::new(accounts), Arc::new(transactions));

        let err = workflow
            .post_transaction("acc-1", Decimal::new(-100, 2), OperationKind::Deposit)
            .await
            .unwrap_err();

        assert!(matches!(err, BankError::InvalidAmount { .. }));
    }
}
