//! Wire types for the HTTP surface
//!
//! Requests carry the operation kind as a string (`"deposit"` /
//! `"withdrawal"`), parsed at the boundary so unknown kinds map to a 400
//! instead of a deserialization error.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Account, OperationKind, Transaction};

/// Body of `POST /accounts`
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAccountRequest {
    pub name: String,
    /// Opening balance; defaults to zero
    #[serde(default)]
    pub balance: Decimal,
    pub currency: String,
}

/// Account representation returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: String,
    pub name: String,
    pub balance: Decimal,
    pub currency: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            name: account.name,
            balance: account.balance,
            currency: account.currency,
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

/// Body of `POST /transactions`
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTransactionRequest {
    pub account_id: String,
    pub amount: Decimal,
    /// Operation kind as a string; validated against the closed enum
    #[serde(rename = "type")]
    pub kind: String,
}

/// Transaction representation returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub id: String,
    pub account_id: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: OperationKind,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Transaction> for TransactionResponse {
    fn from(tx: Transaction) -> Self {
        Self {
            id: tx.id,
            account_id: tx.account_id,
            amount: tx.amount,
            kind: tx.kind,
            created_at: tx.created_at,
            updated_at: tx.updated_at,
        }
    }
}
