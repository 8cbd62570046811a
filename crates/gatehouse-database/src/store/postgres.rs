//! PostgreSQL account store implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use gatehouse_core::error::{AppError, ErrorKind};
use gatehouse_core::result::AppResult;
use gatehouse_entity::account::{Account, AccountStatus, NewAccount};

use super::AccountStore;

/// Account store backed by PostgreSQL.
///
/// Uniqueness of `id_number` and `email` is enforced by the named unique
/// constraints in the schema, so concurrent creates cannot race past the
/// application-level checks.
#[derive(Debug, Clone)]
pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    /// Create a new PostgreSQL account store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn create(&self, data: &NewAccount) -> AppResult<Account> {
        sqlx::query_as::<_, Account>(
            "INSERT INTO accounts \
             (id_number, password_hash, first_name, last_name, middle_name, email, \
              level, status, is_staff, is_superuser) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING *",
        )
        .bind(&data.id_number)
        .bind(&data.password_hash)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.middle_name)
        .bind(&data.email)
        .bind(data.level)
        .bind(data.status)
        .bind(data.is_staff)
        .bind(data.is_superuser)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("accounts_id_number_key") =>
            {
                AppError::validation(format!("ID number '{}' already exists", data.id_number))
            }
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("accounts_email_key") =>
            {
                AppError::validation("Email already in use".to_string())
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create account", e),
        })
    }

    async fn find_by_id_number(&self, id_number: &str) -> AppResult<Option<Account>> {
        sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE id_number = $1")
            .bind(id_number)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find account by ID number", e)
            })
    }

    async fn find_by_uuid(&self, uuid: Uuid) -> AppResult<Option<Account>> {
        sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE uuid = $1")
            .bind(uuid)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find account by uuid", e)
            })
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find account by email", e)
            })
    }

    async fn update_status(&self, uuid: Uuid, status: AccountStatus) -> AppResult<Account> {
        sqlx::query_as::<_, Account>(
            "UPDATE accounts SET status = $2, updated_at = NOW() WHERE uuid = $1 RETURNING *",
        )
        .bind(uuid)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update status", e))?
        .ok_or_else(|| AppError::not_found(format!("Account {uuid} not found")))
    }

    async fn touch_last_login(&self, uuid: Uuid) -> AppResult<()> {
        let result =
            sqlx::query("UPDATE accounts SET last_login = NOW(), updated_at = NOW() WHERE uuid = $1")
                .bind(uuid)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to update last login", e)
                })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Account {uuid} not found")));
        }
        Ok(())
    }
}
