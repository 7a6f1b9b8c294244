//! Registration/login helpers for integration tests.

#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::json;
use uuid::Uuid;

use super::api_path;

pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub token: String,
}

/// Register a fresh user and log in, returning a usable bearer token.
pub async fn register_test_user(client: &TestServer) -> TestUser {
    let email = format!("user-{}@example.com", Uuid::new_v4());
    let password = "correct horse battery staple";

    let response = client
        .post(&api_path("/auth/register"))
        .json(&json!({
            "first_name": "Test",
            "last_name": "User",
            "email": email,
            "password": password,
            "confirm_password": password,
        }))
        .await;
    assert_eq!(response.status_code(), 201);

    let body: serde_json::Value = response.json();
    let id = Uuid::parse_str(
        body.get("id")
            .and_then(|v| v.as_str())
            .expect("Expected 'id' in register response"),
    )
    .expect("Invalid UUID in register response");

    let response = client
        .post(&api_path("/auth/login"))
        .json(&json!({ "email": email, "password": password }))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: serde_json::Value = response.json();
    let token = body
        .get("token")
        .and_then(|v| v.as_str())
        .expect("Expected 'token' in login response")
        .to_string();

    TestUser { id, email, token }
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
