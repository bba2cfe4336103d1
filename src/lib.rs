//! Bank Engine Library
//! # Overview
//!
//! This library provides a small bank service: accounts with non-negative
//! decimal balances, immutable deposit/withdrawal transaction records, and
//! a transaction-posting workflow that keeps balance and history consistent
//! even when the history append fails after the balance commit.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Transaction, BankError)
//! - [`core`] - Business logic components:
//!   - [`core::policy`] - Pure balance policy (decide or reject)
//!   - [`core::traits`] - Store contracts the workflow depends on
//!   - [`core::workflow`] - Transaction-posting orchestration with
//!     per-account serialization and best-effort compensation
//!   - [`core::memory`] - In-memory reference store implementations
//! - [`http`] - Axum HTTP adapter (routes, DTOs, error mapping)
//! - [`cli`] - CLI argument parsing
//!
//! # Consistency
//!
//! The core correctness property: replaying an account's recorded
//! transactions from its opening balance reproduces the current balance
//! exactly. The workflow preserves this under failure by compensating a
//! committed balance when the corresponding append fails, and under
//! concurrency by serializing same-account invocations.

// Module declarations
pub mod cli;
pub mod core;
pub mod http;
pub mod types;

pub use crate::core::{
    AccountStore, MemoryAccountStore, MemoryTransactionStore, TransactionStore,
    TransactionWorkflow,
};
pub use types::{
    Account, AccountUpdate, BankError, NewAccount, NewTransaction, OperationKind, Transaction,
    TransactionSummary,
};
