//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gatehouse_entity::account::Account;

/// Login response: token pair plus the account's public profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Access token.
    pub access: String,
    /// Refresh token.
    pub refresh: String,
    /// Public profile of the authenticated account.
    pub user: ProfileResponse,
}

/// Token refresh response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    /// New access token.
    pub access: String,
}

/// Current-user response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    /// Public profile of the authenticated account.
    pub user: ProfileResponse,
}

/// Redacted public projection of an account.
///
/// Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    /// Stable unique identifier.
    pub uuid: Uuid,
    /// Identification number.
    pub id_number: String,
    /// Email address.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Middle name.
    pub middle_name: Option<String>,
    /// Authorization tier.
    pub user_level: String,
    /// Account status.
    pub status: String,
    /// Whether the account may authenticate (derived from status).
    pub is_active: bool,
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

impl From<&Account> for ProfileResponse {
    fn from(account: &Account) -> Self {
        Self {
            uuid: account.uuid,
            id_number: account.id_number.clone(),
            email: account.email.clone(),
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            middle_name: account.middle_name.clone(),
            user_level: account.level.to_string(),
            status: account.status.to_string(),
            is_active: account.is_active(),
            is_staff: account.is_staff,
            is_superuser: account.is_superuser,
            last_login: account.last_login,
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
