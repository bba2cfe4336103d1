//! Error types for the bank engine
//!
//! This module defines all error types that can occur while posting
//! transactions and operating the backing stores.
//!
//! # Error Categories
//!
//! - **Caller-input errors**: unknown account, invalid kind or amount,
//!   insufficient funds. No mutation has happened; safe to report directly.
//! - **Store errors**: the backing store is unreachable or rejected a call.
//!   Callers may retry with their own backoff; the workflow never retries.
//! - **Recording failures**: the balance was committed but the history
//!   append failed. The workflow compensates best-effort and surfaces both
//!   the append error and, when the compensation also fails, that error too.

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the bank engine
///
/// Each variant carries enough context to diagnose the failure at the
/// call site without consulting logs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankError {
    /// No account exists with the given identifier
    #[error("Account not found: {id}")]
    AccountNotFound {
        /// The identifier that was looked up
        id: String,
    },

    /// No transaction record exists with the given identifier
    #[error("Transaction not found: {id}")]
    TransactionNotFound {
        /// The identifier that was looked up
        id: String,
    },

    /// The operation kind is not `deposit` or `withdrawal`
    #[error("Invalid operation kind '{kind}'")]
    InvalidOperationKind {
        /// The rejected kind string
        kind: String,
    },

    /// The amount is negative or otherwise unusable
    #[error("Invalid amount '{amount}': must be non-negative")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// A request failed validation before reaching the stores
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// Description of the validation failure
        message: String,
    },

    /// The balance does not cover the requested withdrawal
    ///
    /// The account state is unchanged and no transaction was recorded.
    #[error("Insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Balance at decision time
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// A balance computation would overflow
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },

    /// The backing store could not be reached or rejected the call
    ///
    /// Transport-level failure; callers may retry with their own backoff.
    #[error("Store unavailable: {message}")]
    StoreUnavailable {
        /// Description of the transport failure
        message: String,
    },

    /// The balance was committed but the transaction append failed
    ///
    /// The workflow issued one compensating balance write. When that write
    /// also failed, `compensation` carries the second error so the detected
    /// inconsistency stays visible to the caller.
    #[error("Transaction recording failed: {append}{}", compensation.as_ref().map(|c| format!("; compensation also failed: {c}")).unwrap_or_default())]
    RecordingFailed {
        /// The error returned by the transaction append
        append: Box<BankError>,
        /// The error returned by the compensating balance write, if it failed
        compensation: Option<Box<BankError>>,
    },
}

// Helper functions for creating common errors

impl BankError {
    /// Create an AccountNotFound error
    pub fn account_not_found(id: &str) -> Self {
        BankError::AccountNotFound { id: id.to_string() }
    }

    /// Create a TransactionNotFound error
    pub fn transaction_not_found(id: &str) -> Self {
        BankError::TransactionNotFound { id: id.to_string() }
    }

    /// Create an InvalidOperationKind error
    pub fn invalid_operation_kind(kind: &str) -> Self {
        BankError::InvalidOperationKind {
            kind: kind.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        BankError::InvalidAmount { amount }
    }

    /// Create an InvalidRequest error
    pub fn invalid_request(message: &str) -> Self {
        BankError::InvalidRequest {
            message: message.to_string(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(balance: Decimal, requested: Decimal) -> Self {
        BankError::InsufficientFunds { balance, requested }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        BankError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }

    /// Create a StoreUnavailable error
    pub fn store_unavailable(message: &str) -> Self {
        BankError::StoreUnavailable {
            message: message.to_string(),
        }
    }

    /// Create a RecordingFailed error from the append failure and the
    /// outcome of the compensating write
    pub fn recording_failed(append: BankError, compensation: Option<BankError>) -> Self {
        BankError::RecordingFailed {
            append: Box::new(append),
            compensation: compensation.map(Box::new),
        }
    }
}
