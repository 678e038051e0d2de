// Storage adapters (persistence layer)
// Implement the domain BlobStorage contract

pub mod json_file_storage;
pub mod memory_storage;

pub use json_file_storage::JsonFileStorage;
pub use memory_storage::MemoryStorage;
