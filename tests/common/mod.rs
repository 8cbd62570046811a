//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use gatehouse_api::state::AppState;
use gatehouse_auth::authenticator::Authenticator;
use gatehouse_auth::jwt::{JwtDecoder, JwtEncoder};
use gatehouse_auth::manager::AuthManager;
use gatehouse_auth::password::PasswordHasher;
use gatehouse_core::config::app::{CorsConfig, ServerConfig};
use gatehouse_core::config::auth::AuthConfig;
use gatehouse_core::config::logging::LoggingConfig;
use gatehouse_core::config::{AppConfig, DatabaseConfig};
use gatehouse_database::store::{AccountStore, MemoryAccountStore};
use gatehouse_entity::account::{Account, AccountLevel, AccountStatus};
use gatehouse_service::account::{AccountService, CreateAccount};

/// Test application context backed by the in-memory store.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// Store handle for direct state manipulation.
    pub store: Arc<MemoryAccountStore>,
    /// Provisioning service for seeding accounts.
    pub account_service: Arc<AccountService>,
}

impl TestApp {
    /// Create a new test application.
    pub fn new() -> Self {
        let config = test_config();

        let store = Arc::new(MemoryAccountStore::new());
        let store_dyn: Arc<dyn AccountStore> = store.clone();

        let password_hasher = Arc::new(PasswordHasher::new());
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

        let authenticator = Arc::new(Authenticator::new(
            Arc::clone(&store_dyn),
            Arc::clone(&password_hasher),
        ));
        let auth_manager = Arc::new(AuthManager::new(
            authenticator,
            jwt_encoder,
            Arc::clone(&jwt_decoder),
            Arc::clone(&store_dyn),
        ));
        let account_service = Arc::new(AccountService::new(
            Arc::clone(&store_dyn),
            password_hasher,
        ));

        let state = AppState {
            config: Arc::new(config),
            store: store_dyn,
            jwt_decoder,
            auth_manager,
            account_service: Arc::clone(&account_service),
        };

        Self {
            router: gatehouse_api::router::build_router(state),
            store,
            account_service,
        }
    }

    /// Create a test account and return it.
    pub async fn create_test_account(
        &self,
        id_number: &str,
        password: &str,
        level: AccountLevel,
    ) -> Account {
        self.account_service
            .create_account(CreateAccount {
                id_number: id_number.to_string(),
                password: password.to_string(),
                first_name: "Test".to_string(),
                last_name: "Account".to_string(),
                middle_name: None,
                email: format!("{}@test.com", id_number.to_lowercase()),
                level,
                status: None,
                is_staff: false,
                is_superuser: false,
            })
            .await
            .expect("Failed to create test account")
    }

    /// Deactivate an account directly through the store.
    pub async fn deactivate(&self, account: &Account) {
        self.store
            .update_status(account.uuid, AccountStatus::Inactive)
            .await
            .expect("Failed to deactivate account");
    }

    /// Login and return the `(access, refresh)` token pair.
    pub async fn login(&self, id_number: &str, password: &str) -> (String, String) {
        let response = self
            .request(
                "POST",
                "/login/",
                Some(serde_json::json!({
                    "id_number": id_number,
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        let access = response
            .body
            .get("access")
            .and_then(|v| v.as_str())
            .expect("No access token in login response")
            .to_string();
        let refresh = response
            .body
            .get("refresh")
            .and_then(|v| v.as_str())
            .expect("No refresh token in login response")
            .to_string();

        (access, refresh)
    }

    /// Make an HTTP request to the test app.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Response from a test request.
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Parsed JSON body.
    pub body: Value,
}

fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors: CorsConfig::default(),
        },
        database: DatabaseConfig {
            url: String::new(),
            max_connections: 1,
            min_connections: 1,
            connect_timeout_seconds: 1,
            idle_timeout_seconds: 1,
        },
        auth: AuthConfig {
            jwt_secret: "integration-test-secret".to_string(),
            jwt_access_ttl_minutes: 15,
            jwt_refresh_ttl_hours: 24,
        },
        logging: LoggingConfig::default(),
    }
}
