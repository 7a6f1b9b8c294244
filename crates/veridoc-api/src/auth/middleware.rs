//! Bearer-token authentication middleware.
//!
//! Runs before any body handling: a request that fails here has zero
//! storage side effects.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use veridoc_core::AppError;

use crate::auth::models::AuthUser;
use crate::auth::JwtService;
use crate::error::HttpAppError;

pub async fn auth_middleware(
    State(jwt): State<Arc<JwtService>>,
    mut request: Request,
    next: Next,
) -> Response {
    let auth_header = match request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
    {
        Some(h) => h,
        None => {
            return HttpAppError(AppError::Unauthorized(
                "Missing authorization header".to_string(),
            ))
            .into_response();
        }
    };

    let Some(token) = auth_header.strip_prefix("Bearer ") else {
        return HttpAppError(AppError::Unauthorized(
            "Invalid authorization header format".to_string(),
        ))
        .into_response();
    };

    match jwt.validate_token(token) {
        Ok(claims) => {
            request.extensions_mut().insert(AuthUser { id: claims.sub });
            next.run(request).await
        }
        Err(e) => HttpAppError(e).into_response(),
    }
}
