//! Veridoc Storage Library
//!
//! Storage abstraction and the local filesystem backend for stored document
//! files.
//!
//! # Storage key format
//!
//! Keys are identity-scoped: `documents/{identity}/{filename}`. Keys must not
//! contain `..` or a leading `/`. Key generation is centralized in the `keys`
//! module so callers and backends stay consistent.

pub mod keys;
pub mod local;
pub mod traits;

// Re-export commonly used types
pub use keys::generate_storage_key;
pub use local::LocalStorage;
pub use traits::{Storage, StorageError, StorageResult};
