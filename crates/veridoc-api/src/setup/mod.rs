//! Application setup and initialization
//!
//! All startup wiring lives here instead of main.rs so integration tests can
//! build the exact production router against their own config.

pub mod routes;
pub mod server;

use std::sync::Arc;

use anyhow::{Context, Result};
use veridoc_core::Config;
use veridoc_processing::DocumentValidator;
use veridoc_registry::Registry;
use veridoc_storage::LocalStorage;

use crate::auth::JwtService;
use crate::state::AppState;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    let storage = LocalStorage::new(&config.storage_path, config.storage_base_url.clone())
        .await
        .context("Failed to initialize local storage")?;

    let registry = Registry::open(&config.registry_path)
        .await
        .context("Failed to open record registry")?;

    let jwt = Arc::new(JwtService::new(&config.jwt_secret, config.jwt_expiry_hours));

    let validator = DocumentValidator::new(
        config.max_document_size_bytes,
        config.allowed_extensions.clone(),
        config.allowed_content_types.clone(),
    );

    let state = Arc::new(AppState {
        config: config.clone(),
        storage: Arc::new(storage),
        registry,
        jwt,
        validator,
    });

    let router = routes::setup_routes(&config, state.clone())?;

    tracing::info!("Application initialized");

    Ok((state, router))
}
