//! Thread-safe in-memory account store
//!
//! `MemoryAccountStore` keeps account records in a `DashMap`, which provides
//! fine-grained locking through internal sharding. Operations on different
//! accounts do not block each other; mutations of a single account go
//! through the entry guard and are therefore atomic per record.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::core::traits::AccountStore;
use crate::types::{Account, AccountUpdate, BankError, NewAccount};

/// In-memory account store backed by a concurrent map
///
/// Reads return snapshots: a returned [`Account`] reflects the state at the
/// time of the call and is not updated by later writes.
#[derive(Debug, Default)]
pub struct MemoryAccountStore {
    accounts: DashMap<String, Account>,
}

impl MemoryAccountStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
        }
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn create(&self, new: NewAccount) -> Result<Account, BankError> {
        let now = Utc::now();
        let account = Account {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            balance: new.balance,
            currency: new.currency,
            created_at: now,
            updated_at: now,
        };
        self.accounts.insert(account.id.clone(), account.clone());
        Ok(account)
    }

    async fn get_by_id(&self, id: &str) -> Result<Account, BankError> {
        self.accounts
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| BankError::account_not_found(id))
    }

    async fn get_all(&self) -> Result<Vec<Account>, BankError> {
        let mut accounts: Vec<Account> = self
            .accounts
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        accounts.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(accounts)
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Account>, BankError> {
        Ok(self
            .accounts
            .iter()
            .find(|entry| entry.value().name == name)
            .map(|entry| entry.value().clone()))
    }

    async fn update(&self, id: &str, update: AccountUpdate) -> Result<Account, BankError> {
        let mut entry = self
            .accounts
            .get_mut(id)
            .ok_or_else(|| BankError::account_not_found(id))?;
        let account = entry.value_mut();
        if let Some(name) = update.name {
            account.name = name;
        }
        if let Some(currency) = update.currency {
            account.currency = currency;
        }
        account.updated_at = Utc::now();
        Ok(account.clone())
    }

    async fn update_balance(&self, id: &str, new_balance: Decimal) -> Result<(), BankError> {
        let mut entry = self
            .accounts
            .get_mut(id)
            .ok_or_else(|| BankError::account_not_found(id))?;
        let account = entry.value_mut();
        account.balance = new_balance;
        account.updated_at = Utc::now();
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), BankError> {
        self.accounts
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| BankError::account_not_found(id))
    }
}
