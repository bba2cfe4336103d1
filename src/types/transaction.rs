//! Transaction-related types for the bank engine
//!
//! This module defines the operation kind, the immutable transaction record,
//! and the shapes used to append and summarize transactions.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::BankError;

/// Operations supported by the transaction workflow
///
/// The kind is a closed enum: anything that is not a deposit or a
/// withdrawal is rejected at the parse boundary with
/// [`BankError::InvalidOperationKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// Credit funds to an account; always succeeds for valid amounts
    Deposit,

    /// Debit funds from an account; requires sufficient balance
    Withdrawal,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationKind::Deposit => write!(f, "deposit"),
            OperationKind::Withdrawal => write!(f, "withdrawal"),
        }
    }
}

impl FromStr for OperationKind {
    type Err = BankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deposit" => Ok(OperationKind::Deposit),
            "withdrawal" => Ok(OperationKind::Withdrawal),
            other => Err(BankError::invalid_operation_kind(other)),
        }
    }
}

/// An immutable record of a single deposit or withdrawal
///
/// Created exactly once per successful balance mutation and never edited
/// afterwards. The signed effect on the balance is expressed as an
/// unsigned `amount` plus the operation `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Opaque unique identifier, assigned by the store on append
    pub id: String,

    /// Identifier of the owning account
    pub account_id: String,

    /// Unsigned transaction amount
    pub amount: Decimal,

    /// Whether the amount was deposited or withdrawn
    pub kind: OperationKind,

    /// When the record was appended
    pub created_at: DateTime<Utc>,

    /// When the record was last touched (equal to `created_at` in the core)
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// The signed effect of this transaction on the account balance
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            OperationKind::Deposit => self.amount,
            OperationKind::Withdrawal => -self.amount,
        }
    }
}

/// Request to append a transaction record
///
/// The store assigns the identifier and both timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    /// Identifier of the owning account
    pub account_id: String,

    /// Unsigned transaction amount
    pub amount: Decimal,

    /// Whether the amount is deposited or withdrawn
    pub kind: OperationKind,
}

/// Aggregated view of an account's transaction history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionSummary {
    /// Identifier of the summarized account
    pub account_id: String,

    /// Number of recorded transactions
    pub total_transactions: usize,

    /// Sum of all deposit amounts
    pub total_deposits: Decimal,

    /// Sum of all withdrawal amounts
    pub total_withdrawals: Decimal,

    /// Timestamp of the most recent transaction, if any
    pub last_transaction_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::deposit("deposit", OperationKind::Deposit)]
    #[case::withdrawal("withdrawal", OperationKind::Withdrawal)]
    fn test_kind_parses_known_values(#[case] input: &str, #[case] expected: OperationKind) {
        assert_eq!(input.parse::<OperationKind>().unwrap(), expected);
    }

    #[rstest]
    #[case::empty("")]
    #[case::unknown("transfer")]
    #[case::case_sensitive("Deposit")]
    fn test_kind_rejects_unknown_values(#[case] input: &str) {
        let err = input.parse::<OperationKind>().unwrap_err();
        assert!(matches!(err, BankError::InvalidOperationKind { .. }));
    }

    #[test]
    fn test_kind_display_matches_wire_format() {
        assert_eq!(OperationKind::Deposit.to_string(), "deposit");
        assert_eq!(OperationKind::Withdrawal.to_string(), "withdrawal");
    }

    #[test]
    fn test_kind_serde_uses_lowercase() {
        let json = serde_json::to_string(&OperationKind::Withdrawal).unwrap();
        assert_eq!(json, "\"withdrawal\"");

        let kind: OperationKind = serde_json::from_str("\"deposit\"").unwrap();
        assert_eq!(kind, OperationKind::Deposit);
    }

    #[rstest]
    #[case::deposit(OperationKind::Deposit, Decimal::new(2500, 2))]
    #[case::withdrawal(OperationKind::Withdrawal, Decimal::new(-2500, 2))]
    fn test_signed_amount(#[case] kind: OperationKind, #[case] expected: Decimal) {
        let now = Utc::now();
        let tx = Transaction {
            id: "tx-1".to_string(),
            account_id: "acc-1".to_string(),
            amount: Decimal::new(2500, 2),
            kind,
            created_at: now,
            updated_at: now,
        };
        assert_eq!(tx.signed_amount(), expected);
    }
}
