//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use gatehouse_auth::jwt::decoder::JwtDecoder;
use gatehouse_auth::manager::AuthManager;
use gatehouse_core::config::AppConfig;
use gatehouse_database::store::AccountStore;
use gatehouse_service::account::AccountService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Account persistence.
    pub store: Arc<dyn AccountStore>,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Login and refresh orchestration.
    pub auth_manager: Arc<AuthManager>,
    /// Account provisioning service.
    pub account_service: Arc<AccountService>,
}
