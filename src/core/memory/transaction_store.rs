//! Thread-safe in-memory transaction store
//!
//! `MemoryTransactionStore` keeps immutable transaction records in a
//! `DashMap` keyed by transaction id. Records are only ever inserted;
//! nothing in the store mutates a record after `append`.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::core::traits::TransactionStore;
use crate::types::{BankError, NewTransaction, OperationKind, Transaction, TransactionSummary};

/// In-memory transaction store backed by a concurrent map
#[derive(Debug, Default)]
pub struct MemoryTransactionStore {
    transactions: DashMap<String, Transaction>,
}

impl MemoryTransactionStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            transactions: DashMap::new(),
        }
    }
}

#[async_trait]
impl TransactionStore for MemoryTransactionStore {
    async fn append(&self, new: NewTransaction) -> Result<Transaction, BankError> {
        let now = Utc::now();
        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            account_id: new.account_id,
            amount: new.amount,
            kind: new.kind,
            created_at: now,
            updated_at: now,
        };
        self.transactions
            .insert(transaction.id.clone(), transaction.clone());
        Ok(transaction)
    }

    async fn get_by_id(&self, id: &str) -> Result<Transaction, BankError> {
        self.transactions
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| BankError::transaction_not_found(id))
    }

    async fn get_by_account(&self, account_id: &str) -> Result<Vec<Transaction>, BankError> {
        let mut transactions: Vec<Transaction> = self
            .transactions
            .iter()
            .filter(|entry| entry.value().account_id == account_id)
            .map(|entry| entry.value().clone())
            .collect();
        // Timestamps can tie within one clock tick; the id breaks the tie
        // so the order stays stable across calls.
        transactions.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(transactions)
    }

    async fn get_all(&self) -> Result<Vec<Transaction>, BankError> {
        let mut transactions: Vec<Transaction> = self
            .transactions
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        transactions.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(transactions)
    }

    async fn summary(&self, account_id: &str) -> Result<TransactionSummary, BankError> {
        let transactions = self.get_by_account(account_id).await?;

        let mut total_deposits = Decimal::ZERO;
        let mut total_withdrawals = Decimal::ZERO;
        for tx in &transactions {
            match tx.kind {
                OperationKind::Deposit => total_deposits += tx.amount,
                OperationKind::Withdrawal => total_withdrawals += tx.amount,
            }
        }

        Ok(TransactionSummary {
            account_id: account_id.to_string(),
            total_transactions: transactions.len(),
            total_deposits,
            total_withdrawals,
            last_transaction_at: transactions.last().map(|tx| tx.created_at),
        })
    }
}
