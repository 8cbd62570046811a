//! Login and refresh orchestration.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use gatehouse_core::error::AppError;
use gatehouse_core::result::AppResult;
use gatehouse_database::store::AccountStore;
use gatehouse_entity::account::Account;

use crate::authenticator::Authenticator;
use crate::jwt::encoder::TokenPair;
use crate::jwt::{JwtDecoder, JwtEncoder};

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    /// Generated token pair.
    pub tokens: TokenPair,
    /// The authenticated account.
    pub account: Account,
}

/// Orchestrates the login and token-refresh flows.
#[derive(Clone)]
pub struct AuthManager {
    /// Credential verifier.
    authenticator: Arc<Authenticator>,
    /// JWT encoder for token generation.
    jwt_encoder: Arc<JwtEncoder>,
    /// JWT decoder for token validation.
    jwt_decoder: Arc<JwtDecoder>,
    /// Account persistence.
    store: Arc<dyn AccountStore>,
}

impl AuthManager {
    /// Creates a new auth manager with all required dependencies.
    pub fn new(
        authenticator: Arc<Authenticator>,
        jwt_encoder: Arc<JwtEncoder>,
        jwt_decoder: Arc<JwtDecoder>,
        store: Arc<dyn AccountStore>,
    ) -> Self {
        Self {
            authenticator,
            jwt_encoder,
            jwt_decoder,
            store,
        }
    }

    /// Performs the complete login flow:
    ///
    /// 1. Verify credentials and the status gate
    /// 2. Mint an access + refresh token pair bound to the account uuid
    /// 3. Record the login time (best effort)
    pub async fn login(&self, id_number: &str, password: &str) -> AppResult<LoginResult> {
        let account = self.authenticator.authenticate(id_number, password).await?;

        let tokens = self.jwt_encoder.generate_token_pair(account.uuid)?;

        let _ = self.store.touch_last_login(account.uuid).await;

        info!(account = %account.uuid, "Login successful");

        Ok(LoginResult { tokens, account })
    }

    /// Mints a new access token from a valid refresh token.
    ///
    /// 1. Validate the refresh token's signature, expiry, and type
    /// 2. Re-resolve the bound account
    /// 3. Generate a new access token
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<(String, DateTime<Utc>)> {
        let claims = self.jwt_decoder.decode_refresh_token(refresh_token)?;

        let account = self
            .store
            .find_by_uuid(claims.account_uuid())
            .await?
            .ok_or_else(|| AppError::token("Account no longer exists"))?;

        // TODO: decide whether refresh should reject inactive accounts.
        // Deactivation currently leaves previously issued refresh tokens
        // usable until they expire.
        let (access_token, expires_at) = self.jwt_encoder.generate_access_token(account.uuid)?;

        info!(account = %account.uuid, "Access token refreshed");

        Ok((access_token, expires_at))
    }
}
