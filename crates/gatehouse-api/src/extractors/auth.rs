//! `AuthAccount` extractor — pulls the JWT from the Authorization header,
//! validates it, and resolves the bound account.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use gatehouse_core::error::AppError;
use gatehouse_entity::account::Account;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated account available in handlers.
///
/// Any failure — missing header, malformed or expired token, or an
/// account that no longer exists — rejects the request with 401 before
/// the handler runs.
#[derive(Debug, Clone)]
pub struct AuthAccount(pub Account);

impl AuthAccount {
    /// Returns the inner [`Account`].
    pub fn account(&self) -> &Account {
        &self.0
    }
}

impl std::ops::Deref for AuthAccount {
    type Target = Account;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthAccount {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Extract Bearer token from Authorization header
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::token("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::token("Invalid Authorization header format"))?;

        // Decode and validate the access token
        let claims = state.jwt_decoder.decode_access_token(token)?;

        // Resolve the bound account
        let account = state
            .store
            .find_by_uuid(claims.account_uuid())
            .await?
            .ok_or_else(|| AppError::token("Account no longer exists"))?;

        Ok(AuthAccount(account))
    }
}
