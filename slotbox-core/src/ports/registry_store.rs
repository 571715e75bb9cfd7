//! Registry store port - persistence abstraction for the directory

use std::path::Path;

use crate::domain::result::Result;
use crate::domain::RegistrationDirectory;

/// Persistence abstraction for the registration directory
///
/// The directory is the whole unit of persistence: `load` reads it
/// wholesale, `save` replaces it wholesale (last write wins). Both
/// fail on an empty path; `load` fails on malformed content.
pub trait RegistryStore {
    /// Load the full directory from the given path
    fn load(&self, path: &Path) -> Result<RegistrationDirectory>;

    /// Save the full directory to the given path
    fn save(&self, path: &Path, directory: &RegistrationDirectory) -> Result<()>;
}
