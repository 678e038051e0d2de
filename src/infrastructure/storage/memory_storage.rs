use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::repositories::{BlobStorage, StorageError};

/// In-memory implementation of `BlobStorage`
///
/// Used by unit tests that exercise store behavior without touching the
/// filesystem. Contents are lost when the instance is dropped.
#[derive(Default)]
pub struct MemoryStorage {
    blobs: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlobStorage for MemoryStorage {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.blobs.lock().await.get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.blobs
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
