//! In-memory storage backend for exercising failure paths.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;
use veridoc_storage::{generate_storage_key, Storage, StorageError, StorageResult};

/// Storage backend holding files in a map, with an optional scripted upload
/// failure: the Nth upload overall returns an error.
pub struct MemoryStorage {
    files: Mutex<HashMap<String, Vec<u8>>>,
    upload_count: AtomicUsize,
    // 0 means never fail.
    fail_upload_on: AtomicUsize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            files: Mutex::new(HashMap::new()),
            upload_count: AtomicUsize::new(0),
            fail_upload_on: AtomicUsize::new(0),
        }
    }

    /// Make the Nth upload (1-based, counted across the storage's lifetime)
    /// fail with an upload error.
    pub fn fail_upload_on(&self, n: usize) {
        self.fail_upload_on.store(n, Ordering::SeqCst);
    }

    pub fn file_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }

    /// All stored keys, sorted for stable comparison.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.files.lock().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn upload(
        &self,
        identity: Uuid,
        filename: &str,
        _content_type: &str,
        data: Vec<u8>,
    ) -> StorageResult<(String, String)> {
        let n = self.upload_count.fetch_add(1, Ordering::SeqCst) + 1;
        if n == self.fail_upload_on.load(Ordering::SeqCst) {
            return Err(StorageError::UploadFailed(format!(
                "scripted failure on upload {}",
                n
            )));
        }

        let key = generate_storage_key(identity, filename);
        let url = format!("memory://{}", key);
        self.files.lock().unwrap().insert(key.clone(), data);
        Ok((key, url))
    }

    async fn delete(&self, storage_key: &str) -> StorageResult<()> {
        self.files.lock().unwrap().remove(storage_key);
        Ok(())
    }

    async fn exists(&self, storage_key: &str) -> StorageResult<bool> {
        Ok(self.files.lock().unwrap().contains_key(storage_key))
    }
}
