//! Account provisioning — validated creation and superuser setup.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use gatehouse_auth::password::PasswordHasher;
use gatehouse_core::error::AppError;
use gatehouse_core::result::AppResult;
use gatehouse_database::store::AccountStore;
use gatehouse_entity::account::{Account, AccountLevel, AccountStatus, NewAccount};

/// Data required to provision a new account.
///
/// The password arrives in plaintext and is hashed before anything is
/// persisted; `status` defaults to active when omitted.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAccount {
    /// Identification number — the login key.
    #[validate(length(min = 1, message = "ID number is required"))]
    pub id_number: String,
    /// Plaintext password; never stored.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Given name.
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    /// Family name.
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    /// Middle name (optional).
    pub middle_name: Option<String>,
    /// Email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Authorization tier.
    pub level: AccountLevel,
    /// Initial status; active when omitted.
    pub status: Option<AccountStatus>,
    /// Staff console flag.
    #[serde(default)]
    pub is_staff: bool,
    /// Superuser flag.
    #[serde(default)]
    pub is_superuser: bool,
}

/// Handles account provisioning.
#[derive(Clone)]
pub struct AccountService {
    /// Account persistence.
    store: Arc<dyn AccountStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(store: Arc<dyn AccountStore>, hasher: Arc<PasswordHasher>) -> Self {
        Self { store, hasher }
    }

    /// Provisions a new account.
    ///
    /// Validates the input, rejects duplicate ID numbers and emails, and
    /// hashes the password before persisting. The raw password never
    /// reaches the store.
    pub async fn create_account(&self, data: CreateAccount) -> AppResult<Account> {
        data.validate()
            .map_err(|e| AppError::validation(e.to_string()))?;

        if self
            .store
            .find_by_id_number(&data.id_number)
            .await?
            .is_some()
        {
            return Err(AppError::validation(format!(
                "ID number '{}' already exists",
                data.id_number
            )));
        }

        if self.store.find_by_email(&data.email).await?.is_some() {
            return Err(AppError::validation("Email already in use".to_string()));
        }

        let password_hash = self.hasher.hash_password(&data.password)?;

        let account = self
            .store
            .create(&NewAccount {
                id_number: data.id_number,
                password_hash,
                first_name: data.first_name,
                last_name: data.last_name,
                middle_name: data.middle_name,
                email: data.email,
                level: data.level,
                status: data.status.unwrap_or(AccountStatus::Active),
                is_staff: data.is_staff,
                is_superuser: data.is_superuser,
            })
            .await?;

        info!(account = %account.uuid, id_number = %account.id_number, "Account created");

        Ok(account)
    }

    /// Provisions a superuser account: admin level, staff and superuser
    /// flags set, active status.
    pub async fn create_superuser(
        &self,
        id_number: &str,
        password: &str,
        email: &str,
        first_name: &str,
        last_name: &str,
    ) -> AppResult<Account> {
        self.create_account(CreateAccount {
            id_number: id_number.to_string(),
            password: password.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            middle_name: None,
            email: email.to_string(),
            level: AccountLevel::Admin,
            status: Some(AccountStatus::Active),
            is_staff: true,
            is_superuser: true,
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatehouse_core::error::ErrorKind;
    use gatehouse_database::store::MemoryAccountStore;

    fn service() -> (AccountService, Arc<PasswordHasher>) {
        let hasher = Arc::new(PasswordHasher::new());
        (
            AccountService::new(Arc::new(MemoryAccountStore::new()), hasher.clone()),
            hasher,
        )
    }

    fn inspector(id_number: &str, email: &str) -> CreateAccount {
        CreateAccount {
            id_number: id_number.to_string(),
            password: "Secret1!".to_string(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            middle_name: None,
            email: email.to_string(),
            level: AccountLevel::Inspector,
            status: None,
            is_staff: false,
            is_superuser: false,
        }
    }

    #[tokio::test]
    async fn test_create_defaults_to_active_and_hashes_password() {
        let (service, hasher) = service();

        let account = service
            .create_account(inspector("EMP-001", "a@x.com"))
            .await
            .unwrap();

        assert_eq!(account.status, AccountStatus::Active);
        assert!(account.is_active());
        assert_ne!(account.password_hash, "Secret1!");
        assert!(
            hasher
                .verify_password("Secret1!", &account.password_hash)
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_empty_id_number_rejected() {
        let (service, _) = service();

        let err = service
            .create_account(inspector("", "a@x.com"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_duplicate_id_number_rejected() {
        let (service, _) = service();

        service
            .create_account(inspector("EMP-001", "a@x.com"))
            .await
            .unwrap();
        let err = service
            .create_account(inspector("EMP-001", "b@x.com"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let (service, _) = service();

        service
            .create_account(inspector("EMP-001", "a@x.com"))
            .await
            .unwrap();
        let err = service
            .create_account(inspector("EMP-002", "a@x.com"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_create_superuser_sets_flags() {
        let (service, _) = service();

        let account = service
            .create_superuser("ADM-001", "Secret1!", "admin@x.com", "Root", "Admin")
            .await
            .unwrap();

        assert_eq!(account.level, AccountLevel::Admin);
        assert!(account.is_staff);
        assert!(account.is_superuser);
        assert_eq!(account.status, AccountStatus::Active);
    }
}
