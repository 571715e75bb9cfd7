//! In-memory adapter for the registry store port
//!
//! Used by tests to exercise the credential store without touching the
//! filesystem. The handle is cloneable so a test can keep one clone
//! and observe what the service persisted through another.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::result::{Error, Result};
use crate::domain::RegistrationDirectory;
use crate::ports::RegistryStore;

/// Registry store backed by shared process memory
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    directory: Arc<RwLock<RegistrationDirectory>>,
    fail_saves: Arc<AtomicBool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an existing directory
    pub fn with_directory(directory: RegistrationDirectory) -> Self {
        Self {
            directory: Arc::new(RwLock::new(directory)),
            fail_saves: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Make every subsequent `save` fail, to exercise persistence
    /// failure paths
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::Relaxed);
    }

    /// Snapshot of the currently persisted directory
    pub fn directory(&self) -> RegistrationDirectory {
        self.directory.read().expect("store lock poisoned").clone()
    }
}

impl RegistryStore for MemoryStore {
    fn load(&self, _path: &Path) -> Result<RegistrationDirectory> {
        Ok(self.directory())
    }

    fn save(&self, _path: &Path, directory: &RegistrationDirectory) -> Result<()> {
        if self.fail_saves.load(Ordering::Relaxed) {
            return Err(Error::store("simulated save failure"));
        }
        *self.directory.write().expect("store lock poisoned") = directory.clone();
        Ok(())
    }
}
