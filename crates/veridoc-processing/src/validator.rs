use std::path::Path;

/// Validation errors for a document submission.
///
/// Every variant names the multipart field it concerns so the client can
/// point the user at the offending input. A single violation rejects the
/// whole submission; there is no partial accept.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required file field(s): {}", missing.join(", "))]
    IncompleteSubmission { missing: Vec<String> },

    #[error("Duplicate file field: {field}")]
    DuplicateField { field: String },

    #[error("File for '{field}' too large: {size} bytes (max: {max} bytes)")]
    FileTooLarge {
        field: String,
        size: usize,
        max: usize,
    },

    #[error("File for '{field}' is empty")]
    EmptyFile { field: String },

    #[error("File for '{field}' has no extension (filename: {filename})")]
    MissingExtension { field: String, filename: String },

    #[error("Unsupported extension '{extension}' for '{field}' (allowed: {allowed:?})")]
    UnsupportedExtension {
        field: String,
        extension: String,
        allowed: Vec<String>,
    },

    #[error("Unsupported content type '{content_type}' for '{field}' (allowed: {allowed:?})")]
    UnsupportedContentType {
        field: String,
        content_type: String,
        allowed: Vec<String>,
    },

    #[error("Content type '{content_type}' does not match extension '{extension}' for '{field}'")]
    ContentTypeMismatch {
        field: String,
        extension: String,
        content_type: String,
    },
}

impl ValidationError {
    /// The multipart field this error concerns, when it concerns exactly one.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::IncompleteSubmission { .. } => None,
            ValidationError::DuplicateField { field }
            | ValidationError::FileTooLarge { field, .. }
            | ValidationError::EmptyFile { field }
            | ValidationError::MissingExtension { field, .. }
            | ValidationError::UnsupportedExtension { field, .. }
            | ValidationError::UnsupportedContentType { field, .. }
            | ValidationError::ContentTypeMismatch { field, .. } => Some(field),
        }
    }
}

/// Normalize a MIME type by stripping parameters
/// (e.g. "image/jpeg; charset=utf-8" -> "image/jpeg").
fn normalize_mime_type(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .map(|s| s.trim())
        .unwrap_or(content_type)
}

/// Document file validator
///
/// Provides metadata validation for submitted document files without
/// coupling to multipart extraction or storage details.
pub struct DocumentValidator {
    max_file_size: usize,
    allowed_extensions: Vec<String>,
    allowed_content_types: Vec<String>,
}

impl DocumentValidator {
    pub fn new(
        max_file_size: usize,
        allowed_extensions: Vec<String>,
        allowed_content_types: Vec<String>,
    ) -> Self {
        Self {
            max_file_size,
            allowed_extensions,
            allowed_content_types,
        }
    }

    /// Validate file size
    pub fn validate_file_size(&self, field: &str, size: usize) -> Result<(), ValidationError> {
        if size == 0 {
            return Err(ValidationError::EmptyFile {
                field: field.to_string(),
            });
        }

        if size > self.max_file_size {
            return Err(ValidationError::FileTooLarge {
                field: field.to_string(),
                size,
                max: self.max_file_size,
            });
        }

        Ok(())
    }

    /// Validate filename extension against the allow-list.
    /// Returns the normalized (lowercase) extension.
    pub fn validate_extension(
        &self,
        field: &str,
        filename: &str,
    ) -> Result<String, ValidationError> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .ok_or_else(|| ValidationError::MissingExtension {
                field: field.to_string(),
                filename: filename.to_string(),
            })?;

        if !self.allowed_extensions.contains(&extension) {
            return Err(ValidationError::UnsupportedExtension {
                field: field.to_string(),
                extension,
                allowed: self.allowed_extensions.clone(),
            });
        }

        Ok(extension)
    }

    /// Validate declared content type against the allow-list.
    pub fn validate_content_type(
        &self,
        field: &str,
        content_type: &str,
    ) -> Result<(), ValidationError> {
        let normalized = normalize_mime_type(content_type).to_lowercase();

        if !self.allowed_content_types.iter().any(|ct| ct == &normalized) {
            return Err(ValidationError::UnsupportedContentType {
                field: field.to_string(),
                content_type: content_type.to_string(),
                allowed: self.allowed_content_types.clone(),
            });
        }

        Ok(())
    }

    /// Validate that the declared Content-Type matches the filename extension.
    /// Both signals must agree; a spoofed Content-Type header with a
    /// legitimate extension (or vice versa) rejects the submission.
    pub fn validate_extension_content_type_match(
        &self,
        field: &str,
        extension: &str,
        content_type: &str,
    ) -> Result<(), ValidationError> {
        let normalized = normalize_mime_type(content_type).to_lowercase();

        let expected: &[&str] = match extension {
            "jpg" | "jpeg" => &["image/jpeg"],
            "png" => &["image/png"],
            _ => {
                // Unknown extensions already fail the allow-list check;
                // nothing left to cross-validate here.
                tracing::debug!(
                    extension = %extension,
                    content_type = %content_type,
                    "Unknown extension, skipping Content-Type/extension cross-validation"
                );
                return Ok(());
            }
        };

        if !expected.iter().any(|ct| ct == &normalized) {
            return Err(ValidationError::ContentTypeMismatch {
                field: field.to_string(),
                extension: extension.to_string(),
                content_type: content_type.to_string(),
            });
        }

        Ok(())
    }

    /// Validate all aspects of one submitted file.
    /// Returns the normalized extension for use in the stored filename.
    pub fn validate_file(
        &self,
        field: &str,
        filename: &str,
        content_type: &str,
        file_size: usize,
    ) -> Result<String, ValidationError> {
        self.validate_file_size(field, file_size)?;
        let extension = self.validate_extension(field, filename)?;
        self.validate_content_type(field, content_type)?;
        self.validate_extension_content_type_match(field, &extension, content_type)?;
        Ok(extension)
    }
}
