//! Account-related types for the bank engine
//!
//! This module defines the Account structure and the request shapes used
//! to create and patch accounts through the store contract.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A bank account holding a non-negative balance in a single currency
///
/// The balance is only ever mutated through the transaction workflow;
/// every mutation bumps `updated_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Opaque unique identifier, assigned by the store on creation
    pub id: String,

    /// Display name for the account holder
    pub name: String,

    /// Current balance
    ///
    /// Invariant: never negative at any point observable by another
    /// operation. Enforced by the balance policy before every commit.
    pub balance: Decimal,

    /// ISO-4217-style 3-letter currency code (e.g. "USD")
    pub currency: String,

    /// When the account was created
    pub created_at: DateTime<Utc>,

    /// When the account was last modified
    pub updated_at: DateTime<Utc>,
}

/// Request to create an account
///
/// The store assigns the identifier and both timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAccount {
    /// Display name for the account holder
    pub name: String,

    /// Opening balance, must be non-negative
    pub balance: Decimal,

    /// 3-letter currency code
    pub currency: String,
}

/// Partial update for account metadata
///
/// The balance is deliberately absent: balance mutations go through
/// `AccountStore::update_balance` only, driven by the workflow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountUpdate {
    /// New display name, if changing
    pub name: Option<String>,

    /// New currency code, if changing
    pub currency: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_serializes_expected_fields() {
        let now = Utc::now();
        let account = Account {
            id: "acc-1".to_string(),
            name: "Alice".to_string(),
            balance: Decimal::new(5000, 2),
            currency: "USD".to_string(),
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(json["id"], "acc-1");
        assert_eq!(json["name"], "Alice");
        assert_eq!(json["balance"], "50.00");
        assert_eq!(json["currency"], "USD");
    }

    #[test]
    fn test_account_update_default_is_empty() {
        let update = AccountUpdate::default();
        assert!(update.name.is_none());
        assert!(update.currency.is_none());
    }
}
