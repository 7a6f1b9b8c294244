use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;
use uuid::Uuid;
use veridoc_core::models::{DocumentSet, User};

use crate::error::{RegistryError, RegistryResult};

/// On-disk shape of the registry file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct RecordFile {
    users: HashMap<Uuid, User>,
}

/// Durable registry of user accounts and their document sets.
///
/// Cheap to clone; clones share the same record map and file.
#[derive(Clone)]
pub struct Registry {
    path: PathBuf,
    records: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl Registry {
    /// Open the registry file, creating an empty registry if it does not
    /// exist yet.
    pub async fn open(path: impl Into<PathBuf>) -> RegistryResult<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let records = if fs::try_exists(&path).await.unwrap_or(false) {
            let raw = fs::read(&path).await?;
            let file: RecordFile = serde_json::from_slice(&raw)?;
            file.users
        } else {
            HashMap::new()
        };

        tracing::info!(
            path = %path.display(),
            user_count = records.len(),
            "Registry opened"
        );

        Ok(Registry {
            path,
            records: Arc::new(RwLock::new(records)),
        })
    }

    /// Persist a snapshot of the record map by copy-on-write swap:
    /// write a temp file next to the registry file, fsync, rename over it.
    ///
    /// Must be called while holding the write lock so commits stay ordered.
    async fn persist(&self, records: &HashMap<Uuid, User>) -> RegistryResult<()> {
        let snapshot = RecordFile {
            users: records.clone(),
        };
        let data = serde_json::to_vec_pretty(&snapshot)?;

        let tmp_path = self.path.with_extension("json.tmp");

        let mut file = fs::File::create(&tmp_path).await.map_err(|e| {
            RegistryError::PersistFailed(format!(
                "Failed to create {}: {}",
                tmp_path.display(),
                e
            ))
        })?;
        file.write_all(&data).await.map_err(|e| {
            RegistryError::PersistFailed(format!("Failed to write {}: {}", tmp_path.display(), e))
        })?;
        file.sync_all().await.map_err(|e| {
            RegistryError::PersistFailed(format!("Failed to sync {}: {}", tmp_path.display(), e))
        })?;
        drop(file);

        fs::rename(&tmp_path, &self.path).await.map_err(|e| {
            RegistryError::PersistFailed(format!(
                "Failed to swap {} into place: {}",
                tmp_path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Create a new user account. Fails if the email is already registered
    /// (case-insensitive).
    pub async fn create_user(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password_hash: &str,
    ) -> RegistryResult<User> {
        let normalized_email = email.trim().to_lowercase();

        let mut records = self.records.write().await;

        if records
            .values()
            .any(|u| u.email.eq_ignore_ascii_case(&normalized_email))
        {
            return Err(RegistryError::EmailTaken(normalized_email));
        }

        let user = User {
            id: Uuid::new_v4(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: normalized_email,
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
            documents: None,
        };

        records.insert(user.id, user.clone());

        if let Err(e) = self.persist(&records).await {
            records.remove(&user.id);
            return Err(e);
        }

        tracing::info!(user_id = %user.id, "User registered");

        Ok(user)
    }

    pub async fn get_user(&self, id: Uuid) -> Option<User> {
        self.records.read().await.get(&id).cloned()
    }

    pub async fn get_user_by_email(&self, email: &str) -> Option<User> {
        let normalized = email.trim().to_lowercase();
        self.records
            .read()
            .await
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(&normalized))
            .cloned()
    }

    /// The current document set of an identity.
    ///
    /// `UserNotFound` when the identity has no account record; `Ok(None)`
    /// when the account exists but never completed an upload cycle.
    pub async fn get_documents(&self, identity: Uuid) -> RegistryResult<Option<DocumentSet>> {
        let records = self.records.read().await;
        let user = records
            .get(&identity)
            .ok_or(RegistryError::UserNotFound(identity))?;
        Ok(user.documents.clone())
    }

    /// Atomically replace the identity's document set, returning the
    /// superseded set if one existed.
    ///
    /// The caller must only invoke this after all three new files verifiably
    /// exist in storage. Readers never observe a partially replaced set: the
    /// record is swapped as a whole under the write lock. If durable
    /// persistence fails, the in-memory record is restored and the new set
    /// is not visible to anyone.
    pub async fn replace_documents(
        &self,
        identity: Uuid,
        new_set: DocumentSet,
    ) -> RegistryResult<Option<DocumentSet>> {
        let mut records = self.records.write().await;

        let user = records
            .get_mut(&identity)
            .ok_or(RegistryError::UserNotFound(identity))?;

        let old_set = user.documents.replace(new_set);

        if let Err(e) = self.persist(&records).await {
            // Roll back the in-memory swap so memory and disk agree.
            if let Some(user) = records.get_mut(&identity) {
                user.documents = old_set;
            }
            return Err(e);
        }

        tracing::info!(
            identity = %identity,
            superseded = old_set.is_some(),
            "Document set replaced"
        );

        Ok(old_set)
    }
}
