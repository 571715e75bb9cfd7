//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. The core
//! domain depends only on these traits, not on concrete
//! implementations.

mod hasher;
mod registry_store;

pub use hasher::Hasher;
pub use registry_store::RegistryStore;
