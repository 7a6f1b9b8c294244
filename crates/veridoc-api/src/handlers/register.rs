use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use veridoc_core::AppError;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub id: Uuid,
    pub email: String,
    pub message: String,
}

/// Register a new user account
///
/// Hashes the password with bcrypt before it touches the registry; the
/// plaintext never leaves this handler.
#[utoipa::path(
    post,
    path = "/api/v0/auth/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = RegisterResponse),
        (status = 400, description = "Invalid input or email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, request), fields(operation = "register"))]
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), HttpAppError> {
    let first_name = request.first_name.trim();
    let last_name = request.last_name.trim();
    let email = request.email.trim();

    if first_name.is_empty() || last_name.is_empty() || email.is_empty() {
        return Err(AppError::InvalidInput("All fields are required".to_string()).into());
    }
    if !email.contains('@') {
        return Err(AppError::InvalidInput("Invalid email address".to_string()).into());
    }
    if request.password.is_empty() {
        return Err(AppError::InvalidInput("Password is required".to_string()).into());
    }
    if request.password != request.confirm_password {
        return Err(AppError::InvalidInput("Passwords do not match".to_string()).into());
    }

    let password_hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;

    let user = state
        .registry
        .create_user(first_name, last_name, email, &password_hash)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            id: user.id,
            email: user.email,
            message: "Registration successful".to_string(),
        }),
    ))
}
