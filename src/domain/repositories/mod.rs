// Persistence contracts (ports)
// Implementations live in the infrastructure layer

pub mod blob_storage;

pub use blob_storage::{BlobStorage, StorageError};
