use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::constants::{FIELD_NID_BACK, FIELD_NID_FRONT, FIELD_SELFIE};

/// The three document slots of a verification submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    NidFront,
    NidBack,
    Selfie,
}

impl DocumentKind {
    /// All kinds in canonical order (front, back, selfie).
    pub const ALL: [DocumentKind; 3] = [
        DocumentKind::NidFront,
        DocumentKind::NidBack,
        DocumentKind::Selfie,
    ];

    /// The multipart field name carrying this document.
    pub fn field_name(&self) -> &'static str {
        match self {
            DocumentKind::NidFront => FIELD_NID_FRONT,
            DocumentKind::NidBack => FIELD_NID_BACK,
            DocumentKind::Selfie => FIELD_SELFIE,
        }
    }

    pub fn from_field_name(name: &str) -> Option<Self> {
        match name {
            FIELD_NID_FRONT => Some(DocumentKind::NidFront),
            FIELD_NID_BACK => Some(DocumentKind::NidBack),
            FIELD_SELFIE => Some(DocumentKind::Selfie),
            _ => None,
        }
    }
}

/// Reference to one stored document file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    /// Opaque storage key of the stored bytes.
    pub storage_key: String,
    pub original_filename: String,
    pub stored_filename: String,
    pub file_size: i64,
    pub content_type: String,
    pub created_at: DateTime<Utc>,
}

/// The three document references of one identity.
///
/// A user record holds `Option<DocumentSet>`: fully absent until the first
/// successful upload cycle, fully populated afterwards. Partial sets are
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSet {
    pub front: DocumentRef,
    pub back: DocumentRef,
    pub selfie: DocumentRef,
}

impl DocumentSet {
    pub fn get(&self, kind: DocumentKind) -> &DocumentRef {
        match kind {
            DocumentKind::NidFront => &self.front,
            DocumentKind::NidBack => &self.back,
            DocumentKind::Selfie => &self.selfie,
        }
    }

    /// The three refs in canonical order, for cleanup iteration.
    pub fn refs(&self) -> [&DocumentRef; 3] {
        [&self.front, &self.back, &self.selfie]
    }

    pub fn into_refs(self) -> [DocumentRef; 3] {
        [self.front, self.back, self.selfie]
    }
}

/// Client-facing view of one stored document.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DocumentRefResponse {
    pub filename: String,
    pub file_size: i64,
    pub content_type: String,
    pub uploaded_at: DateTime<Utc>,
}

impl From<&DocumentRef> for DocumentRefResponse {
    fn from(r: &DocumentRef) -> Self {
        DocumentRefResponse {
            filename: r.original_filename.clone(),
            file_size: r.file_size,
            content_type: r.content_type.clone(),
            uploaded_at: r.created_at,
        }
    }
}

/// Client-facing view of a full document set.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DocumentSetResponse {
    pub nid_front: DocumentRefResponse,
    pub nid_back: DocumentRefResponse,
    pub selfie_with_nid: DocumentRefResponse,
}

impl From<&DocumentSet> for DocumentSetResponse {
    fn from(set: &DocumentSet) -> Self {
        DocumentSetResponse {
            nid_front: (&set.front).into(),
            nid_back: (&set.back).into(),
            selfie_with_nid: (&set.selfie).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_name_round_trip() {
        for kind in DocumentKind::ALL {
            assert_eq!(DocumentKind::from_field_name(kind.field_name()), Some(kind));
        }
        assert_eq!(DocumentKind::from_field_name("avatar"), None);
    }
}
