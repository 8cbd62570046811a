//! Route definitions for the Gatehouse HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor. Paths keep the trailing slashes the client
//! application already depends on.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .route("/login/", post(handlers::auth::login))
        .route("/user/", get(handlers::user::current_user))
        .route("/token/refresh/", post(handlers::auth::refresh))
        .route("/health", get(handlers::health::health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}
