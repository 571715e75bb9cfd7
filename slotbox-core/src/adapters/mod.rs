//! Adapter implementations
//!
//! Concrete implementations of the port traits: the JSON file store,
//! the SHA-256 hasher, and an in-memory store for tests.

mod json_store;
mod memory;
mod sha256;

pub use json_store::JsonFileStore;
pub use memory::MemoryStore;
pub use sha256::Sha256Hasher;
