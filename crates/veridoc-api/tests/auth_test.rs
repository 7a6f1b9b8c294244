//! Auth API integration tests.
//!
//! Run with: `cargo test -p veridoc-api --test auth_test`

mod helpers;

use helpers::auth::{bearer, register_test_user};
use helpers::{api_path, setup_test_app, TEST_JWT_SECRET};
use serde_json::json;
use uuid::Uuid;
use veridoc_api::auth::JwtService;

#[tokio::test]
async fn test_register_and_login_round_trip() {
    let app = setup_test_app().await;
    let client = app.client();

    let user = register_test_user(client).await;

    // The token must authorize the protected status endpoint.
    let response = client
        .get(&api_path("/verification/documents"))
        .add_header("Authorization", bearer(&user.token))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: serde_json::Value = response.json();
    assert!(body.get("documents").expect("documents key").is_null());
}

#[tokio::test]
async fn test_register_rejects_duplicate_email() {
    let app = setup_test_app().await;
    let client = app.client();

    let payload = json!({
        "first_name": "Test",
        "last_name": "User",
        "email": "dup@example.com",
        "password": "secret-password",
        "confirm_password": "secret-password",
    });

    let first = client.post(&api_path("/auth/register")).json(&payload).await;
    assert_eq!(first.status_code(), 201);

    let second = client.post(&api_path("/auth/register")).json(&payload).await;
    assert_eq!(second.status_code(), 400);
}

#[tokio::test]
async fn test_register_rejects_password_mismatch() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .post(&api_path("/auth/register"))
        .json(&json!({
            "first_name": "Test",
            "last_name": "User",
            "email": "mismatch@example.com",
            "password": "one-password",
            "confirm_password": "another-password",
        }))
        .await;
    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_login_rejects_wrong_password() {
    let app = setup_test_app().await;
    let client = app.client();

    let user = register_test_user(client).await;

    let response = client
        .post(&api_path("/auth/login"))
        .json(&json!({ "email": user.email, "password": "wrong-password" }))
        .await;
    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_login_rejects_unknown_email() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .post(&api_path("/auth/login"))
        .json(&json!({ "email": "nobody@example.com", "password": "whatever" }))
        .await;
    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_missing_token_rejected() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client.get(&api_path("/verification/documents")).await;
    assert_eq!(response.status_code(), 401);
}

#[tokio::test]
async fn test_malformed_token_rejected() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .get(&api_path("/verification/documents"))
        .add_header("Authorization", "Bearer not-a-jwt")
        .await;
    assert_eq!(response.status_code(), 401);
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let app = setup_test_app().await;
    let client = app.client();

    let user = register_test_user(client).await;

    // Correct secret, already-expired token.
    let expired_issuer = JwtService::new(TEST_JWT_SECRET, -1);
    let expired_token = expired_issuer.issue_token(user.id).unwrap();

    let response = client
        .get(&api_path("/verification/documents"))
        .add_header("Authorization", bearer(&expired_token))
        .await;
    assert_eq!(response.status_code(), 401);

    let body: serde_json::Value = response.json();
    assert!(body
        .get("error")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .contains("expired"));
}

#[tokio::test]
async fn test_token_signed_with_other_secret_rejected() {
    let app = setup_test_app().await;
    let client = app.client();

    let forged = JwtService::new("some-other-secret", 1)
        .issue_token(Uuid::new_v4())
        .unwrap();

    let response = client
        .get(&api_path("/verification/documents"))
        .add_header("Authorization", bearer(&forged))
        .await;
    assert_eq!(response.status_code(), 401);
}
