//! Configuration module
//!
//! Process-wide configuration is read once at startup and passed explicitly
//! to each component as a constructor dependency. Nothing reads environment
//! variables after `Config::from_env` returns.

use std::env;

use crate::constants::{
    ALLOWED_DOCUMENT_CONTENT_TYPES, ALLOWED_DOCUMENT_EXTENSIONS, MAX_DOCUMENT_FILE_SIZE,
};

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_JWT_EXPIRY_HOURS: i64 = 1;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
    /// Shared HS256 signing secret for bearer tokens.
    pub jwt_secret: String,
    pub jwt_expiry_hours: i64,
    /// Root directory for stored document files.
    pub storage_path: String,
    /// Base URL under which stored files are addressable.
    pub storage_base_url: String,
    /// Path of the on-disk record registry file.
    pub registry_path: String,
    pub max_document_size_bytes: usize,
    pub allowed_extensions: Vec<String>,
    pub allowed_content_types: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins_str = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());
        let is_production =
            environment.to_lowercase() == "production" || environment.to_lowercase() == "prod";
        if is_production && cors_origins_str.trim() == "*" {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        let cors_origins: Vec<String> = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        let allowed_extensions = env::var("ALLOWED_EXTENSIONS")
            .unwrap_or_else(|_| ALLOWED_DOCUMENT_EXTENSIONS.join(","))
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .collect();

        let allowed_content_types = env::var("ALLOWED_CONTENT_TYPES")
            .unwrap_or_else(|_| ALLOWED_DOCUMENT_CONTENT_TYPES.join(","))
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .collect();

        Ok(Config {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            cors_origins,
            environment,
            jwt_secret: env::var("JWT_SECRET")
                .map_err(|_| anyhow::anyhow!("JWT_SECRET must be set for authentication"))?,
            jwt_expiry_hours: env::var("JWT_EXPIRY_HOURS")
                .unwrap_or_else(|_| DEFAULT_JWT_EXPIRY_HOURS.to_string())
                .parse()
                .unwrap_or(DEFAULT_JWT_EXPIRY_HOURS),
            storage_path: env::var("STORAGE_PATH").unwrap_or_else(|_| "uploads".to_string()),
            storage_base_url: env::var("STORAGE_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:4000/uploads".to_string()),
            registry_path: env::var("REGISTRY_PATH")
                .unwrap_or_else(|_| "data/registry.json".to_string()),
            max_document_size_bytes: env::var("MAX_FILE_SIZE_MB")
                .ok()
                .and_then(|s| s.parse::<usize>().ok())
                .map(|mb| mb * 1024 * 1024)
                .unwrap_or(MAX_DOCUMENT_FILE_SIZE),
            allowed_extensions,
            allowed_content_types,
        })
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }
}
