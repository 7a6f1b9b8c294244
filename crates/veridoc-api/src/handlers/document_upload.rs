use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use veridoc_core::models::DocumentSetResponse;

use crate::auth::AuthUser;
use crate::error::{ErrorResponse, HttpAppError};
use crate::services::upload::DocumentUploadService;
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct DocumentUploadResponse {
    pub message: String,
    pub documents: DocumentSetResponse,
}

/// Submit identity-verification documents
///
/// Accepts a multipart form with the three required file fields. A valid
/// submission atomically replaces any previously stored set; a rejected one
/// leaves the stored set untouched.
#[utoipa::path(
    post,
    path = "/api/v0/verification/documents",
    tag = "verification",
    responses(
        (status = 200, description = "Documents accepted", body = DocumentUploadResponse),
        (status = 400, description = "Invalid submission", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No account record for this identity", body = ErrorResponse),
        (status = 409, description = "Concurrent modification", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(
    skip(state, multipart),
    fields(identity = %auth.id, operation = "upload_documents")
)]
pub async fn upload_documents(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    multipart: Multipart,
) -> Result<Json<DocumentUploadResponse>, HttpAppError> {
    let service = DocumentUploadService::new(&state);
    let document_set = service.upload(auth.id, multipart).await?;

    Ok(Json(DocumentUploadResponse {
        message: "Documents uploaded successfully".to_string(),
        documents: DocumentSetResponse::from(&document_set),
    }))
}
