//! OpenAPI documentation.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::error;
use crate::handlers;
use veridoc_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Veridoc API",
        version = "0.1.0",
        description = "Identity-verification document upload API (v0). Registered users submit national-ID front/back scans and a selfie holding the ID; a valid submission atomically replaces any previously stored set. All endpoints are versioned under /api/v0/."
    ),
    paths(
        handlers::register::register,
        handlers::login::login,
        handlers::document_upload::upload_documents,
        handlers::document_get::get_documents,
    ),
    components(
        schemas(
            handlers::register::RegisterRequest,
            handlers::register::RegisterResponse,
            handlers::login::LoginRequest,
            handlers::login::LoginResponse,
            handlers::document_upload::DocumentUploadResponse,
            handlers::document_get::DocumentStatusResponse,
            models::DocumentSetResponse,
            models::DocumentRefResponse,
            models::DocumentKind,
            error::ErrorResponse,
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "auth", description = "Registration and token issuance"),
        (name = "verification", description = "Identity document submission and status")
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
