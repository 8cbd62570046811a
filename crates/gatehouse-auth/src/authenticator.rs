//! Identification-number credential verification.

use std::sync::Arc;

use tracing::debug;

use gatehouse_core::error::AppError;
use gatehouse_core::result::AppResult;
use gatehouse_database::store::AccountStore;
use gatehouse_entity::account::Account;

use crate::password::PasswordHasher;

/// The uniform failure message for every credential rejection.
///
/// Lookup miss, password mismatch, and inactive status are reported
/// identically so callers cannot probe which ID numbers exist.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Verifies ID number + password pairs against the account store.
///
/// The store and hasher arrive by constructor injection; there is no
/// process-global backend registry.
#[derive(Clone)]
pub struct Authenticator {
    /// Account persistence.
    store: Arc<dyn AccountStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
}

impl Authenticator {
    /// Creates a new authenticator.
    pub fn new(store: Arc<dyn AccountStore>, hasher: Arc<PasswordHasher>) -> Self {
        Self { store, hasher }
    }

    /// Resolves an account by ID number and validates the password and
    /// status gate.
    ///
    /// Returns the account only when the ID number exists, the password
    /// matches the stored hash, AND the account status is active. Every
    /// other combination fails with the same authentication error.
    pub async fn authenticate(&self, id_number: &str, password: &str) -> AppResult<Account> {
        let account = match self.store.find_by_id_number(id_number).await? {
            Some(account) => account,
            None => {
                debug!(id_number = %id_number, "Login attempt for unknown ID number");
                return Err(AppError::authentication(INVALID_CREDENTIALS));
            }
        };

        let password_valid = self
            .hasher
            .verify_password(password, &account.password_hash)?;

        if !password_valid {
            debug!(account = %account.uuid, "Login attempt with wrong password");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        }

        if !account.is_active() {
            debug!(account = %account.uuid, "Login attempt on inactive account");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        }

        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatehouse_core::error::ErrorKind;
    use gatehouse_database::store::MemoryAccountStore;
    use gatehouse_entity::account::{AccountLevel, AccountStatus, NewAccount};

    async fn setup(status: AccountStatus) -> Authenticator {
        let store = Arc::new(MemoryAccountStore::new());
        let hasher = Arc::new(PasswordHasher::new());

        store
            .create(&NewAccount {
                id_number: "EMP-001".to_string(),
                password_hash: hasher.hash_password("Secret1!").unwrap(),
                first_name: "A".to_string(),
                last_name: "B".to_string(),
                middle_name: None,
                email: "a@x.com".to_string(),
                level: AccountLevel::Inspector,
                status,
                is_staff: false,
                is_superuser: false,
            })
            .await
            .unwrap();

        Authenticator::new(store, hasher)
    }

    #[tokio::test]
    async fn test_valid_credentials() {
        let auth = setup(AccountStatus::Active).await;
        let account = auth.authenticate("EMP-001", "Secret1!").await.unwrap();
        assert_eq!(account.id_number, "EMP-001");
    }

    #[tokio::test]
    async fn test_wrong_password() {
        let auth = setup(AccountStatus::Active).await;
        let err = auth.authenticate("EMP-001", "wrong").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
        assert_eq!(err.message, INVALID_CREDENTIALS);
    }

    #[tokio::test]
    async fn test_unknown_id_number() {
        let auth = setup(AccountStatus::Active).await;
        let err = auth.authenticate("EMP-999", "Secret1!").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
        assert_eq!(err.message, INVALID_CREDENTIALS);
    }

    #[tokio::test]
    async fn test_inactive_account_rejected_despite_correct_password() {
        let auth = setup(AccountStatus::Inactive).await;
        let err = auth.authenticate("EMP-001", "Secret1!").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
        assert_eq!(err.message, INVALID_CREDENTIALS);
    }

    #[tokio::test]
    async fn test_id_number_is_case_sensitive() {
        let auth = setup(AccountStatus::Active).await;
        let err = auth.authenticate("emp-001", "Secret1!").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }
}
