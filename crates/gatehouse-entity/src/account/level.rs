//! Account authorization level enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Authorization tiers available to accounts.
///
/// Enforcement beyond the active/inactive gate happens in the client
/// application; the service only stores and reports the tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "account_level", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AccountLevel {
    /// Full system administrator.
    Admin,
    /// Can manage inspectors and records.
    Manager,
    /// Field inspector.
    Inspector,
}

impl AccountLevel {
    /// Return the level as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Inspector => "inspector",
        }
    }
}

impl fmt::Display for AccountLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AccountLevel {
    type Err = gatehouse_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "manager" => Ok(Self::Manager),
            "inspector" => Ok(Self::Inspector),
            _ => Err(gatehouse_core::AppError::validation(format!(
                "Invalid account level: '{s}'. Expected one of: admin, manager, inspector"
            ))),
        }
    }
}
