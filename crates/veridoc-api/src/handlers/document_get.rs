use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;
use veridoc_core::models::DocumentSetResponse;

use crate::auth::AuthUser;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct DocumentStatusResponse {
    /// Present after the first successful submission, null before.
    pub documents: Option<DocumentSetResponse>,
}

/// Get the caller's current document set
#[utoipa::path(
    get,
    path = "/api/v0/verification/documents",
    tag = "verification",
    responses(
        (status = 200, description = "Current document set, or null if none submitted", body = DocumentStatusResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No account record for this identity", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip(state), fields(identity = %auth.id, operation = "get_documents"))]
pub async fn get_documents(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
) -> Result<Json<DocumentStatusResponse>, HttpAppError> {
    let documents = state.registry.get_documents(auth.id).await?;

    Ok(Json(DocumentStatusResponse {
        documents: documents.as_ref().map(DocumentSetResponse::from),
    }))
}
