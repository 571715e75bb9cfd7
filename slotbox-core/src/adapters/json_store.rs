//! JSON file adapter for the registry store port

use std::path::Path;

use crate::domain::result::{Error, Result};
use crate::domain::RegistrationDirectory;
use crate::ports::RegistryStore;

/// Registry store backed by a single JSON document on disk
#[derive(Debug, Default, Clone)]
pub struct JsonFileStore;

impl JsonFileStore {
    pub fn new() -> Self {
        Self
    }

    fn check_path(path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(Error::store("the file path can not be empty"));
        }
        Ok(())
    }
}

impl RegistryStore for JsonFileStore {
    /// Load the directory from disk
    ///
    /// A missing file yields an empty directory so a fresh install can
    /// start without seeding the data file by hand. Malformed content
    /// is a fatal, propagated error.
    fn load(&self, path: &Path) -> Result<RegistrationDirectory> {
        Self::check_path(path)?;

        if !path.exists() {
            return Ok(RegistrationDirectory::default());
        }

        let content = std::fs::read_to_string(path)?;
        let directory = serde_json::from_str(&content)?;
        Ok(directory)
    }

    fn save(&self, path: &Path, directory: &RegistrationDirectory) -> Result<()> {
        Self::check_path(path)?;

        let content = serde_json::to_string_pretty(directory)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
