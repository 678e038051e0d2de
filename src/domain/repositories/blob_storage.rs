use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by a persistence backend
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Contract for the key-value persistence backend
///
/// The store keeps its two collections as independent named blobs of JSON
/// text. The backend knows nothing about their contents: no schema
/// validation, no versioning, no migration happens at this boundary. A
/// missing key is reported as `Ok(None)`, not an error.
#[async_trait]
pub trait BlobStorage: Send + Sync {
    /// Read the blob stored under `key`, if any
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous blob
    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[async_trait]
impl<T: BlobStorage + ?Sized> BlobStorage for std::sync::Arc<T> {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key).await
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value).await
    }
}
