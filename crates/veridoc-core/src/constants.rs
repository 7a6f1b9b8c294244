//! Shared constants for the document verification service.

/// URL prefix for the versioned API.
pub const API_PREFIX: &str = "/api/v0";

/// Multipart field name for the national-ID front image.
pub const FIELD_NID_FRONT: &str = "nid-front";

/// Multipart field name for the national-ID back image.
pub const FIELD_NID_BACK: &str = "nid-back";

/// Multipart field name for the selfie holding the national ID.
pub const FIELD_SELFIE: &str = "selfie-with-nid";

/// Optional multipart text field carrying the national-ID number.
/// The field may be present and empty; it is never required.
pub const FIELD_NID_NUMBER: &str = "nid-number";

/// The three required file fields, in canonical order.
pub const REQUIRED_DOCUMENT_FIELDS: [&str; 3] = [FIELD_NID_FRONT, FIELD_NID_BACK, FIELD_SELFIE];

/// Per-file size ceiling for uploaded documents (10 MiB).
pub const MAX_DOCUMENT_FILE_SIZE: usize = 10 * 1024 * 1024;

/// Request body ceiling for the whole multipart submission:
/// three files at the per-file ceiling plus multipart framing headroom.
pub const MAX_SUBMISSION_BODY_SIZE: usize = 64 * 1024 * 1024;

/// Filename extensions accepted for document images.
pub const ALLOWED_DOCUMENT_EXTENSIONS: [&str; 3] = ["jpeg", "jpg", "png"];

/// Declared content types accepted for document images.
pub const ALLOWED_DOCUMENT_CONTENT_TYPES: [&str; 2] = ["image/jpeg", "image/png"];
