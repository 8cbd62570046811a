//! Gatehouse Server — user authentication service.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use gatehouse_api::state::AppState;
use gatehouse_auth::authenticator::Authenticator;
use gatehouse_auth::jwt::{JwtDecoder, JwtEncoder};
use gatehouse_auth::manager::AuthManager;
use gatehouse_auth::password::PasswordHasher;
use gatehouse_core::config::AppConfig;
use gatehouse_core::error::AppError;
use gatehouse_database::connection::DatabasePool;
use gatehouse_database::store::{AccountStore, PgAccountStore};
use gatehouse_service::account::AccountService;

#[tokio::main]
async fn main() {
    let env = std::env::var("GATEHOUSE_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Gatehouse v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db = DatabasePool::connect(&config.database).await?;
    gatehouse_database::migration::run_migrations(db.pool()).await?;

    // ── Step 2: Initialize the auth system ───────────────────────
    let store: Arc<dyn AccountStore> = Arc::new(PgAccountStore::new(db.pool().clone()));
    let password_hasher = Arc::new(PasswordHasher::new());
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

    let authenticator = Arc::new(Authenticator::new(
        Arc::clone(&store),
        Arc::clone(&password_hasher),
    ));
    let auth_manager = Arc::new(AuthManager::new(
        Arc::clone(&authenticator),
        Arc::clone(&jwt_encoder),
        Arc::clone(&jwt_decoder),
        Arc::clone(&store),
    ));
    let account_service = Arc::new(AccountService::new(
        Arc::clone(&store),
        Arc::clone(&password_hasher),
    ));

    // ── Step 3: Build and start the HTTP server ──────────────────
    let state = AppState {
        config: Arc::new(config.clone()),
        store,
        jwt_decoder,
        auth_manager,
        account_service,
    };

    let app = gatehouse_api::router::build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Gatehouse server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Gatehouse server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
