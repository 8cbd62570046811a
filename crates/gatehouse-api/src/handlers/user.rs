//! Current-user handler.

use axum::Json;

use crate::dto::response::{CurrentUserResponse, ProfileResponse};
use crate::extractors::AuthAccount;

/// GET /user/
///
/// The extractor has already validated the access token and resolved the
/// account; this handler only projects it into the public profile.
pub async fn current_user(auth: AuthAccount) -> Json<CurrentUserResponse> {
    Json(CurrentUserResponse {
        user: ProfileResponse::from(auth.account()),
    })
}
