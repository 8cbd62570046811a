//! In-memory account store.
//!
//! Backs development mode and the test harness with the same semantics as
//! the PostgreSQL store: uniqueness checks, active-by-default status, and
//! store-managed timestamps. All mutations run under a single write lock
//! so create cannot race its own uniqueness check.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use gatehouse_core::error::AppError;
use gatehouse_core::result::AppResult;
use gatehouse_entity::account::{Account, AccountStatus, NewAccount};

use super::AccountStore;

/// Account store held entirely in process memory.
#[derive(Debug, Default)]
pub struct MemoryAccountStore {
    accounts: RwLock<HashMap<Uuid, Account>>,
}

impl MemoryAccountStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts.
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    /// Whether the store holds no accounts.
    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn create(&self, data: &NewAccount) -> AppResult<Account> {
        let mut accounts = self.accounts.write().await;

        if accounts.values().any(|a| a.id_number == data.id_number) {
            return Err(AppError::validation(format!(
                "ID number '{}' already exists",
                data.id_number
            )));
        }
        if accounts.values().any(|a| a.email == data.email) {
            return Err(AppError::validation("Email already in use".to_string()));
        }

        let now = Utc::now();
        let account = Account {
            uuid: Uuid::new_v4(),
            id_number: data.id_number.clone(),
            password_hash: data.password_hash.clone(),
            first_name: data.first_name.clone(),
            last_name: data.last_name.clone(),
            middle_name: data.middle_name.clone(),
            email: data.email.clone(),
            level: data.level,
            status: data.status,
            is_staff: data.is_staff,
            is_superuser: data.is_superuser,
            last_login: None,
            created_at: now,
            updated_at: now,
        };

        accounts.insert(account.uuid, account.clone());
        Ok(account)
    }

    async fn find_by_id_number(&self, id_number: &str) -> AppResult<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .find(|a| a.id_number == id_number)
            .cloned())
    }

    async fn find_by_uuid(&self, uuid: Uuid) -> AppResult<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(&uuid).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|a| a.email == email).cloned())
    }

    async fn update_status(&self, uuid: Uuid, status: AccountStatus) -> AppResult<Account> {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .get_mut(&uuid)
            .ok_or_else(|| AppError::not_found(format!("Account {uuid} not found")))?;

        account.status = status;
        account.updated_at = Utc::now();
        Ok(account.clone())
    }

    async fn touch_last_login(&self, uuid: Uuid) -> AppResult<()> {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .get_mut(&uuid)
            .ok_or_else(|| AppError::not_found(format!("Account {uuid} not found")))?;

        let now = Utc::now();
        account.last_login = Some(now);
        account.updated_at = now;
        Ok(())
    }
}
