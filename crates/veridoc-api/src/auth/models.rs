use axum::extract::FromRequestParts;
use axum::http::{request::Parts, StatusCode};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ErrorResponse;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Identity of the authenticated user.
    pub sub: Uuid,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Issued-at timestamp.
    pub iat: i64,
}

/// Verified caller identity, inserted into request extensions by the auth
/// middleware. The only source of identity for downstream handlers.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub id: Uuid,
}

// Implement FromRequestParts so AuthUser composes with Multipart extraction:
// Extension cannot be used together with Multipart, so we read the parts
// directly.
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<AuthUser>().copied().ok_or_else(|| {
            (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse {
                    error: "Missing authentication context".to_string(),
                    details: None,
                    error_type: None,
                    code: "UNAUTHORIZED".to_string(),
                    recoverable: false,
                    suggested_action: Some("Authenticate and retry".to_string()),
                }),
            )
        })
    }
}
