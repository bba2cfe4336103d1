//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account-related types
//! - `transaction`: Transaction-related types and the operation kind
//! - `error`: Error types for the bank engine

pub mod account;
pub mod error;
pub mod transaction;

pub use account::{Account, AccountUpdate, NewAccount};
pub use error::BankError;
pub use transaction::{NewTransaction, OperationKind, Transaction, TransactionSummary};
