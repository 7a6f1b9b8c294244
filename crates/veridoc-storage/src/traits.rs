//! Storage abstraction trait
//!
//! This module defines the Storage trait that storage backends implement.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// The upload orchestrator and the cleanup step work against this trait so
/// tests can substitute fakes, and the document registry never couples to
/// filesystem details.
///
/// **Key format:** Keys are identity-scoped: `documents/{identity}/{filename}`.
/// See the crate root documentation.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Write a file and return (storage_key, storage_url).
    ///
    /// The storage_key is the opaque reference recorded in the document
    /// registry; the storage_url is the addressable URL of the file.
    async fn upload(
        &self,
        identity: Uuid,
        filename: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> StorageResult<(String, String)>;

    /// Delete a file by its storage key. Deleting a missing file succeeds.
    async fn delete(&self, storage_key: &str) -> StorageResult<()>;

    /// Check if a file exists.
    async fn exists(&self, storage_key: &str) -> StorageResult<bool>;
}
