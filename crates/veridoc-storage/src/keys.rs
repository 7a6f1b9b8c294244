//! Shared key generation for storage backends.
//!
//! Key format: `documents/{identity}/{filename}`.

use uuid::Uuid;

/// Generate a storage key for the given identity and stored filename.
///
/// All backends must use this format so registry records stay portable
/// across backends.
pub fn generate_storage_key(identity: Uuid, filename: &str) -> String {
    format!("documents/{}/{}", identity, filename)
}
