//! Registration directory domain model
//!
//! The directory is the unit of persistence for the credential store:
//! it is loaded wholesale at startup and saved wholesale after each
//! successful registration. Uniqueness is enforced by scanning the
//! record list, keeping insertion order intact.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One registered (username, password-digest) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub id: Uuid,
    pub username: String,
    pub password_digest: String,
}

impl CredentialRecord {
    pub fn new(id: Uuid, username: impl Into<String>, password_digest: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            password_digest: password_digest.into(),
        }
    }
}

/// The registered-user directory, persisted as one JSON document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationDirectory {
    #[serde(default)]
    pub users: Vec<CredentialRecord>,
}

impl RegistrationDirectory {
    /// Find a record by username, case-insensitively
    ///
    /// Usernames are ASCII-only by the validation grammar, so ASCII
    /// case folding is an exact match for the grammar's alphabet.
    pub fn find(&self, username: &str) -> Option<&CredentialRecord> {
        self.users
            .iter()
            .find(|record| record.username.eq_ignore_ascii_case(username))
    }

    /// True if a record with this username exists (case-insensitive)
    pub fn contains(&self, username: &str) -> bool {
        self.find(username).is_some()
    }
}
