//! Core business logic module
//!
//! This module contains the account-balance mutation workflow and its
//! collaborators:
//! - `policy` - Pure balance policy (decide new balance or reject)
//! - `traits` - Store contracts consumed by the workflow
//! - `memory` - In-memory reference store implementations
//! - `workflow` - Transaction-posting orchestration with compensation

pub mod memory;
pub mod policy;
pub mod traits;
pub mod workflow;

pub use memory::{MemoryAccountStore, MemoryTransactionStore};
pub use traits::{AccountStore, TransactionStore};
pub use workflow::TransactionWorkflow;
