//! Integration tests for the token refresh flow.

mod common;

use axum::http::StatusCode;
use gatehouse_entity::account::AccountLevel;

#[tokio::test]
async fn test_refresh_returns_working_access_token() {
    let app = common::TestApp::new();
    let account = app
        .create_test_account("EMP-001", "Secret1!", AccountLevel::Inspector)
        .await;
    let (_access, refresh) = app.login("EMP-001", "Secret1!").await;

    let response = app
        .request(
            "POST",
            "/token/refresh/",
            Some(serde_json::json!({"refresh": refresh})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let new_access = response
        .body
        .get("access")
        .and_then(|v| v.as_str())
        .expect("No access token in refresh response")
        .to_string();

    // The refreshed token must independently resolve to the same account.
    let response = app.request("GET", "/user/", None, Some(&new_access)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response
            .body
            .get("user")
            .and_then(|u| u.get("uuid"))
            .unwrap()
            .as_str()
            .unwrap(),
        account.uuid.to_string()
    );
}

#[tokio::test]
async fn test_refresh_rejects_access_token() {
    let app = common::TestApp::new();
    app.create_test_account("EMP-001", "Secret1!", AccountLevel::Inspector)
        .await;
    let (access, _refresh) = app.login("EMP-001", "Secret1!").await;

    let response = app
        .request(
            "POST",
            "/token/refresh/",
            Some(serde_json::json!({"refresh": access})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_rejects_garbage_token() {
    let app = common::TestApp::new();

    let response = app
        .request(
            "POST",
            "/token/refresh/",
            Some(serde_json::json!({"refresh": "not-a-real-token"})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_succeeds_for_deactivated_account() {
    // Deactivation does not invalidate previously issued refresh tokens;
    // they keep minting access tokens until they expire.
    let app = common::TestApp::new();
    let account = app
        .create_test_account("EMP-001", "Secret1!", AccountLevel::Inspector)
        .await;
    let (_access, refresh) = app.login("EMP-001", "Secret1!").await;

    app.deactivate(&account).await;

    let response = app
        .request(
            "POST",
            "/token/refresh/",
            Some(serde_json::json!({"refresh": refresh})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.get("access").is_some());
}
