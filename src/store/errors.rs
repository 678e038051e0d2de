use thiserror::Error;

use crate::domain::repositories::StorageError;

/// Errors that can occur in the induction store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot delete the last remaining administrator")]
    LastAdmin,

    #[error("storage failure: {0}")]
    Storage(#[from] StorageError),

    #[error("serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
