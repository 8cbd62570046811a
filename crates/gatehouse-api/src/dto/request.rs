//! Request DTOs.

use serde::{Deserialize, Serialize};

/// Login request body.
///
/// Both fields default to empty so the handler can report a missing
/// field with the exact boundary message instead of a deserialization
/// rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Identification number.
    #[serde(default)]
    pub id_number: String,
    /// Password.
    #[serde(default)]
    pub password: String,
}

/// Token refresh request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// Refresh token.
    pub refresh: String,
}
