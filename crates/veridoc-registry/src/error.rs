use thiserror::Error;
use uuid::Uuid;

/// Registry operation errors
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Email already registered: {0}")]
    EmailTaken(String),

    #[error("No account record for identity {0}")]
    UserNotFound(Uuid),

    #[error("Failed to persist registry: {0}")]
    PersistFailed(String),

    #[error("Corrupt registry file: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;
