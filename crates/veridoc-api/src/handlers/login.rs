use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use veridoc_core::AppError;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
}

/// Authenticate and issue a bearer token
///
/// Unknown email and wrong password produce the same response so the
/// endpoint does not leak which accounts exist.
#[utoipa::path(
    post,
    path = "/api/v0/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated", body = LoginResponse),
        (status = 400, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, request), fields(operation = "login"))]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpAppError> {
    let invalid = || AppError::InvalidInput("Invalid credentials".to_string());

    let user = state
        .registry
        .get_user_by_email(&request.email)
        .await
        .ok_or_else(invalid)?;

    let password_matches = bcrypt::verify(&request.password, &user.password_hash)
        .map_err(|e| AppError::Internal(format!("Failed to verify password: {}", e)))?;
    if !password_matches {
        return Err(invalid().into());
    }

    let token = state.jwt.issue_token(user.id)?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(Json(LoginResponse { token }))
}
