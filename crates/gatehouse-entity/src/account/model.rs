//! Account entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::level::AccountLevel;
use super::status::AccountStatus;

/// A registered account in the Gatehouse system.
///
/// The login key is `id_number`; `uuid` is the stable identity that
/// tokens bind to and is never used for login.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Account {
    /// Stable unique identifier, generated at creation.
    pub uuid: Uuid,
    /// Identification number — the sole login key, case-sensitive.
    pub id_number: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Middle name (optional).
    pub middle_name: Option<String>,
    /// Email address — unique, but never used for login.
    pub email: String,
    /// Authorization tier.
    pub level: AccountLevel,
    /// Account status gating authentication.
    pub status: AccountStatus,
    /// Staff console flag.
    pub is_staff: bool,
    /// Superuser flag.
    pub is_superuser: bool,
    /// Last successful login time.
    pub last_login: Option<DateTime<Utc>>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Whether this account may authenticate right now.
    ///
    /// Derived from `status` so the two can never diverge.
    pub fn is_active(&self) -> bool {
        self.status.can_login()
    }
}

/// Data required to create a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAccount {
    /// Identification number.
    pub id_number: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Middle name (optional).
    pub middle_name: Option<String>,
    /// Email address.
    pub email: String,
    /// Authorization tier.
    pub level: AccountLevel,
    /// Initial status.
    pub status: AccountStatus,
    /// Staff console flag.
    pub is_staff: bool,
    /// Superuser flag.
    pub is_superuser: bool,
}
