//! Store contracts consumed by the transaction workflow
//!
//! This module defines the trait abstractions that keep the workflow
//! independent of any concrete backend. The in-memory stores in
//! [`crate::core::memory`] are the reference implementation; relational or
//! document backends plug in behind the same traits.
//!
//! Both traits are mockable in unit tests via `mockall::automock`.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::types::{
    Account, AccountUpdate, BankError, NewAccount, NewTransaction, Transaction,
    TransactionSummary,
};

/// Contract for account persistence
///
/// The workflow exercises only [`get_by_id`](AccountStore::get_by_id) and
/// [`update_balance`](AccountStore::update_balance); the remaining
/// capabilities serve the HTTP surface.
///
/// `get_by_id` returns a snapshot with no implicit locking; the workflow is
/// responsible for serializing its read-then-write sequence per account.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Create an account, assigning its identifier and timestamps
    async fn create(&self, new: NewAccount) -> Result<Account, BankError>;

    /// Get the current snapshot of an account
    async fn get_by_id(&self, id: &str) -> Result<Account, BankError>;

    /// Get all accounts
    async fn get_all(&self) -> Result<Vec<Account>, BankError>;

    /// Find an account by display name
    async fn get_by_name(&self, name: &str) -> Result<Option<Account>, BankError>;

    /// Patch account metadata (never the balance)
    async fn update(&self, id: &str, update: AccountUpdate) -> Result<Account, BankError>;

    /// Atomically overwrite the stored balance and bump `updated_at`
    ///
    /// Atomic with respect to the record's balance field: no reader may
    /// observe a partially applied write.
    async fn update_balance(&self, id: &str, new_balance: Decimal) -> Result<(), BankError>;

    /// Delete an account
    async fn delete(&self, id: &str) -> Result<(), BankError>;
}

/// Contract for transaction persistence
///
/// The workflow exercises only [`append`](TransactionStore::append); the
/// read capabilities serve reporting. Records are immutable once appended.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Durably store a transaction, assigning its identifier and timestamps
    async fn append(&self, new: NewTransaction) -> Result<Transaction, BankError>;

    /// Get a transaction by identifier
    async fn get_by_id(&self, id: &str) -> Result<Transaction, BankError>;

    /// Get all transactions for an account in chronological order
    async fn get_by_account(&self, account_id: &str) -> Result<Vec<Transaction>, BankError>;

    /// Get all transactions
    async fn get_all(&self) -> Result<Vec<Transaction>, BankError>;

    /// Aggregate an account's transaction history
    async fn summary(&self, account_id: &str) -> Result<TransactionSummary, BankError>;
}
