use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::document::DocumentSet;

/// A registered user account.
///
/// `documents` is the canonical document set for the identity; it is only
/// ever swapped as a whole by the document registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// bcrypt hash; never serialized into API responses.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub documents: Option<DocumentSet>,
}
