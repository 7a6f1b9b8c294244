//! Route configuration and setup

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use veridoc_core::constants::{API_PREFIX, MAX_SUBMISSION_BODY_SIZE};
use veridoc_core::Config;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::state::AppState;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router, anyhow::Error> {
    let cors = setup_cors(config)?;

    let public_routes = Router::new()
        .route("/auth/register", post(handlers::register::register))
        .route("/auth/login", post(handlers::login::login));

    // The auth middleware runs before any body handling, so an unauthorized
    // multipart request is rejected without reading its files.
    let protected_routes = Router::new()
        .route(
            "/verification/documents",
            post(handlers::document_upload::upload_documents)
                .get(handlers::document_get::get_documents),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.jwt.clone(),
            crate::auth::middleware::auth_middleware,
        ));

    let api_routes = public_routes.merge(protected_routes);

    let app = Router::new()
        .nest(API_PREFIX, api_routes)
        .route("/health", get(handlers::health::health_check))
        .route(
            "/api/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        // RequestBodyLimitLayer enforces the real cap; axum's built-in limit
        // is disabled so it does not undercut it.
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(MAX_SUBMISSION_BODY_SIZE))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

/// Setup CORS configuration
fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let cors = if config.cors_origins.contains(&"*".to_string()) {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    } else {
        let origins = config
            .cors_origins
            .iter()
            .map(|o| {
                o.parse::<HeaderValue>()
                    .map_err(|e| anyhow::anyhow!("Invalid CORS origin '{}': {}", o, e))
            })
            .collect::<Result<Vec<_>, _>>()?;

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    };
    Ok(cors)
}
