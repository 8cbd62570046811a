//! Auth handlers — login and token refresh.

use axum::Json;
use axum::extract::State;

use gatehouse_core::error::AppError;

use crate::dto::request::{LoginRequest, RefreshRequest};
use crate::dto::response::{LoginResponse, ProfileResponse, RefreshResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Boundary message when either login field is missing or empty.
const MISSING_FIELDS: &str = "Both id_number and password are required.";

/// POST /login/
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    if req.id_number.is_empty() || req.password.is_empty() {
        return Err(AppError::validation(MISSING_FIELDS).into());
    }

    let result = state
        .auth_manager
        .login(&req.id_number, &req.password)
        .await?;

    Ok(Json(LoginResponse {
        access: result.tokens.access_token,
        refresh: result.tokens.refresh_token,
        user: ProfileResponse::from(&result.account),
    }))
}

/// POST /token/refresh/
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<RefreshResponse>, ApiError> {
    let (access, _expires_at) = state.auth_manager.refresh(&req.refresh).await?;

    Ok(Json(RefreshResponse { access }))
}
