// Infrastructure layer module
// Contains persistence adapters for the domain storage contracts

pub mod storage;
