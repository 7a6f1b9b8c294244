//! Document upload orchestration
//!
//! One service drives the whole submission flow:
//! extract → validate → store → swap → clean up superseded files.
//!
//! Files only become canonical at the swap; a request that fails earlier
//! leaves the registry untouched, and a partial `store` failure removes the
//! attempt's own files before returning.

use std::sync::Arc;

use axum::extract::Multipart;
use chrono::Utc;
use uuid::Uuid;
use veridoc_core::constants::{FIELD_NID_NUMBER, REQUIRED_DOCUMENT_FIELDS};
use veridoc_core::models::{DocumentKind, DocumentRef, DocumentSet};
use veridoc_core::AppError;
use veridoc_processing::ValidationError;
use veridoc_storage::Storage;

use crate::error::{registry_to_app_error, storage_to_app_error, validation_to_app_error};
use crate::state::AppState;

/// One submitted file, validated and tagged by slot.
pub struct ValidatedFile {
    pub kind: DocumentKind,
    pub data: Vec<u8>,
    pub original_filename: String,
    pub content_type: String,
    pub extension: String,
}

/// The three validated files of a complete submission. Produced only by
/// `extract_and_validate`; downstream steps never re-parse raw multipart
/// data.
pub struct ValidatedFiles {
    pub front: ValidatedFile,
    pub back: ValidatedFile,
    pub selfie: ValidatedFile,
}

/// Raw file part as received, before validation.
struct ReceivedFile {
    data: Vec<u8>,
    filename: String,
    content_type: String,
}

/// Document upload service
///
/// Composes the validator, storage backend, and record registry into the
/// per-request upload flow.
pub struct DocumentUploadService {
    state: Arc<AppState>,
}

impl DocumentUploadService {
    pub fn new(state: &Arc<AppState>) -> Self {
        Self {
            state: state.clone(),
        }
    }

    /// Run the full upload flow for a verified identity.
    ///
    /// Returns the new canonical document set. The superseded set's files
    /// are deleted best-effort in the background; a deletion failure is
    /// logged and never fails the request.
    pub async fn upload(
        &self,
        identity: Uuid,
        multipart: Multipart,
    ) -> Result<DocumentSet, AppError> {
        // The identity must have an account record before anything touches
        // storage.
        if self.state.registry.get_user(identity).await.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let validated = self.extract_and_validate(multipart).await?;

        let new_set = self.store_documents(identity, validated).await?;

        let old_set = match self
            .state
            .registry
            .replace_documents(identity, new_set.clone())
            .await
        {
            Ok(old) => old,
            Err(e) => {
                // The swap never happened, so the new files will never be
                // referenced; remove them like any other failed attempt.
                self.delete_best_effort(new_set.refs().map(|r| r.storage_key.clone()))
                    .await;
                return Err(registry_to_app_error(e));
            }
        };

        if let Some(old) = old_set {
            let storage = self.state.storage.clone();
            let keys = old.into_refs().map(|r| r.storage_key);
            tokio::spawn(async move {
                for key in keys {
                    if let Err(e) = storage.delete(&key).await {
                        tracing::warn!(
                            error = %e,
                            storage_key = %key,
                            "Failed to delete superseded document file"
                        );
                    }
                }
            });
        }

        tracing::info!(identity = %identity, "Document submission accepted");

        Ok(new_set)
    }

    /// Extract the three required file parts from the multipart form and
    /// validate each one. Fails closed: any unknown file field, duplicate
    /// field, missing field, or per-file violation rejects the whole
    /// submission with zero storage writes.
    async fn extract_and_validate(
        &self,
        mut multipart: Multipart,
    ) -> Result<ValidatedFiles, AppError> {
        let mut received: [Option<ReceivedFile>; 3] = [None, None, None];

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?
        {
            let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

            match DocumentKind::from_field_name(&field_name) {
                Some(kind) => {
                    let slot = kind_index(kind);
                    if received[slot].is_some() {
                        return Err(validation_to_app_error(ValidationError::DuplicateField {
                            field: field_name,
                        }));
                    }

                    let filename = field.file_name().map(|s: &str| s.to_string());
                    let content_type = field.content_type().map(|s: &str| s.to_string());

                    let data = field.bytes().await.map_err(|e| {
                        AppError::InvalidInput(format!("Failed to read file data: {}", e))
                    })?;

                    received[slot] = Some(ReceivedFile {
                        data: data.to_vec(),
                        filename: filename.unwrap_or_else(|| "unknown".to_string()),
                        content_type: content_type
                            .unwrap_or_else(|| "application/octet-stream".to_string()),
                    });
                }
                None if field_name == FIELD_NID_NUMBER => {
                    // The NID number field is accepted and may be empty; the
                    // form requires only the file fields.
                    let value = field.text().await.unwrap_or_default();
                    tracing::debug!(empty = value.trim().is_empty(), "Received nid-number field");
                }
                None => {
                    if field.file_name().is_some() {
                        return Err(AppError::InvalidInput(format!(
                            "Unexpected file field '{}'",
                            field_name
                        )));
                    }
                    // Non-file fields from the wizard form are ignored.
                }
            }
        }

        let [front, back, selfie] = match received {
            [Some(front), Some(back), Some(selfie)] => [front, back, selfie],
            incomplete => {
                let missing = REQUIRED_DOCUMENT_FIELDS
                    .iter()
                    .zip(&incomplete)
                    .filter(|(_, slot)| slot.is_none())
                    .map(|(name, _)| name.to_string())
                    .collect();
                return Err(validation_to_app_error(
                    ValidationError::IncompleteSubmission { missing },
                ));
            }
        };

        Ok(ValidatedFiles {
            front: self.validate_one(DocumentKind::NidFront, front)?,
            back: self.validate_one(DocumentKind::NidBack, back)?,
            selfie: self.validate_one(DocumentKind::Selfie, selfie)?,
        })
    }

    fn validate_one(
        &self,
        kind: DocumentKind,
        file: ReceivedFile,
    ) -> Result<ValidatedFile, AppError> {
        let extension = self
            .state
            .validator
            .validate_file(
                kind.field_name(),
                &file.filename,
                &file.content_type,
                file.data.len(),
            )
            .map_err(validation_to_app_error)?;

        Ok(ValidatedFile {
            kind,
            data: file.data,
            original_filename: file.filename,
            content_type: file.content_type,
            extension,
        })
    }

    /// Persist the three validated blobs under fresh collision-resistant
    /// names. If any write fails, the attempt's already-written siblings are
    /// deleted before the error is returned; previously committed files are
    /// never touched here.
    async fn store_documents(
        &self,
        identity: Uuid,
        files: ValidatedFiles,
    ) -> Result<DocumentSet, AppError> {
        let mut written = Vec::with_capacity(3);

        let front = self.store_one(identity, files.front, &mut written).await?;
        let back = self.store_one(identity, files.back, &mut written).await?;
        let selfie = self.store_one(identity, files.selfie, &mut written).await?;

        Ok(DocumentSet {
            front,
            back,
            selfie,
        })
    }

    async fn store_one(
        &self,
        identity: Uuid,
        file: ValidatedFile,
        written: &mut Vec<String>,
    ) -> Result<DocumentRef, AppError> {
        let stored_filename = format!("{}.{}", Uuid::new_v4(), file.extension);
        let file_size = file.data.len() as i64;

        match self
            .state
            .storage
            .upload(identity, &stored_filename, &file.content_type, file.data)
            .await
        {
            Ok((storage_key, _url)) => {
                written.push(storage_key.clone());
                Ok(DocumentRef {
                    storage_key,
                    original_filename: file.original_filename,
                    stored_filename,
                    file_size,
                    content_type: file.content_type,
                    created_at: Utc::now(),
                })
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    identity = %identity,
                    field = file.kind.field_name(),
                    "Failed to store document file"
                );
                self.delete_best_effort(written.drain(..)).await;
                Err(storage_to_app_error(e))
            }
        }
    }

    /// Delete freshly written files from a failed attempt. Best-effort:
    /// failures are logged only.
    async fn delete_best_effort(&self, keys: impl IntoIterator<Item = String>) {
        for key in keys {
            if let Err(e) = self.state.storage.delete(&key).await {
                tracing::warn!(
                    error = %e,
                    storage_key = %key,
                    "Failed to clean up file from failed upload attempt"
                );
            }
        }
    }
}

fn kind_index(kind: DocumentKind) -> usize {
    match kind {
        DocumentKind::NidFront => 0,
        DocumentKind::NidBack => 1,
        DocumentKind::Selfie => 2,
    }
}
