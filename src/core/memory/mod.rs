//! In-memory reference store implementations
//!
//! This module provides thread-safe, concurrent implementations of the store
//! contracts using DashMap for fine-grained locking per record.
//!
//! # Thread Safety
//!
//! - Operations on different accounts/transactions proceed in parallel
//! - `update_balance` mutates through the entry guard, so a write to one
//!   record is atomic and no reader observes a partial update
//! - No global locks
//!
//! These stores back the tests and the default server binary; production
//! backends implement the same traits over a real database.

pub mod account_store;
pub mod transaction_store;

pub use account_store::MemoryAccountStore;
pub use transaction_store::MemoryTransactionStore;
