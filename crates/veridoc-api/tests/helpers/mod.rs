//! Test helpers: build the production router against temp-dir storage and
//! registry for integration tests.
//!
//! Run from workspace root: `cargo test -p veridoc-api`.

#![allow(dead_code)]

pub mod auth;
pub mod fixtures;
pub mod storage;

use std::path::Path;
use std::sync::Arc;

use axum_test::TestServer;
use tempfile::TempDir;
use veridoc_api::auth::JwtService;
use veridoc_api::state::AppState;
use veridoc_core::constants::{
    ALLOWED_DOCUMENT_CONTENT_TYPES, ALLOWED_DOCUMENT_EXTENSIONS, API_PREFIX,
    MAX_DOCUMENT_FILE_SIZE,
};
use veridoc_core::Config;
use veridoc_processing::DocumentValidator;
use veridoc_registry::Registry;
use veridoc_storage::Storage;

/// API path prefix for tests (e.g. `/api/v0`).
pub fn api_path(path: &str) -> String {
    format!("{}{}", API_PREFIX, path)
}

pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Test application: server and owned temp resources.
pub struct TestApp {
    pub server: TestServer,
    pub state: Arc<AppState>,
    _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Number of files currently present under the storage root.
    pub fn stored_file_count(&self) -> usize {
        count_files(Path::new(&self.state.config.storage_path))
    }
}

fn count_files(dir: &Path) -> usize {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return 0;
    };
    entries
        .filter_map(|e| e.ok())
        .map(|e| {
            let path = e.path();
            if path.is_dir() {
                count_files(&path)
            } else {
                1
            }
        })
        .sum()
}

fn test_config(temp_dir: &TempDir) -> Config {
    Config {
        server_port: 0,
        cors_origins: vec!["*".to_string()],
        environment: "test".to_string(),
        jwt_secret: TEST_JWT_SECRET.to_string(),
        jwt_expiry_hours: 1,
        storage_path: temp_dir
            .path()
            .join("uploads")
            .to_string_lossy()
            .into_owned(),
        storage_base_url: "http://localhost:4000/uploads".to_string(),
        registry_path: temp_dir
            .path()
            .join("data/registry.json")
            .to_string_lossy()
            .into_owned(),
        max_document_size_bytes: MAX_DOCUMENT_FILE_SIZE,
        allowed_extensions: ALLOWED_DOCUMENT_EXTENSIONS
            .iter()
            .map(|s| s.to_string())
            .collect(),
        allowed_content_types: ALLOWED_DOCUMENT_CONTENT_TYPES
            .iter()
            .map(|s| s.to_string())
            .collect(),
    }
}

/// Setup test app with isolated storage and registry under a temp dir.
pub async fn setup_test_app() -> TestApp {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = test_config(&temp_dir);

    let (state, router) = veridoc_api::setup::initialize_app(config)
        .await
        .expect("Failed to initialize app");

    let server = TestServer::new(router).expect("Failed to start test server");

    TestApp {
        server,
        state,
        _temp_dir: temp_dir,
    }
}

/// Setup test app around a caller-supplied storage backend, with a real
/// registry under a temp dir. Production wiring otherwise.
pub async fn setup_test_app_with_storage(storage: Arc<dyn Storage>) -> TestApp {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = test_config(&temp_dir);

    let registry = Registry::open(&config.registry_path)
        .await
        .expect("Failed to open registry");
    let jwt = Arc::new(JwtService::new(&config.jwt_secret, config.jwt_expiry_hours));
    let validator = DocumentValidator::new(
        config.max_document_size_bytes,
        config.allowed_extensions.clone(),
        config.allowed_content_types.clone(),
    );

    let state = Arc::new(AppState {
        config: config.clone(),
        storage,
        registry,
        jwt,
        validator,
    });

    let router = veridoc_api::setup::routes::setup_routes(&config, state.clone())
        .expect("Failed to build router");
    let server = TestServer::new(router).expect("Failed to start test server");

    TestApp {
        server,
        state,
        _temp_dir: temp_dir,
    }
}
