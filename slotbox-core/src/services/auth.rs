//! Auth service - registration and login against the credential directory

use std::path::PathBuf;
use std::sync::OnceLock;

use regex::Regex;
use uuid::Uuid;

use crate::domain::result::{Error, Result};
use crate::domain::{CredentialRecord, RegistrationDirectory, User};
use crate::ports::{Hasher, RegistryStore};

/// Symbols a password may (and must, at least once) contain
const PASSWORD_SYMBOLS: &str = "@$!%*?&";

fn username_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new("^[a-zA-Z0-9]{3,20}$").expect("username pattern is valid"))
}

/// Credential store: owns the registered-user directory
///
/// Persistence and hashing are injected through their ports so tests
/// can swap in deterministic stand-ins.
pub struct AuthService {
    store: Box<dyn RegistryStore>,
    hasher: Box<dyn Hasher>,
    data_path: Option<PathBuf>,
    directory: RegistrationDirectory,
}

impl AuthService {
    pub fn new(store: Box<dyn RegistryStore>, hasher: Box<dyn Hasher>) -> Self {
        Self {
            store,
            hasher,
            data_path: None,
            directory: RegistrationDirectory::default(),
        }
    }

    /// Load the registration directory from the given path
    ///
    /// Malformed content propagates as a fatal error; the caller
    /// decides whether to abort startup.
    pub fn initialize(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        self.directory = self.store.load(&path)?;
        self.data_path = Some(path);
        Ok(())
    }

    /// Register a new user and persist the updated directory
    ///
    /// The updated directory is built as a staged value and only
    /// committed to memory once the save succeeds, so a persistence
    /// failure leaves no half-registered record behind.
    pub fn register(&mut self, username: &str, password: &str) -> Result<User> {
        Self::validate(username, password)?;

        if self.directory.contains(username) {
            return Err(Error::DuplicateUsername(username.to_string()));
        }

        let user = User::new(Uuid::new_v4(), username);
        let digest = self.hasher.digest(password)?;

        let mut staged = self.directory.clone();
        staged
            .users
            .push(CredentialRecord::new(user.id, &user.name, digest));

        let path = self
            .data_path
            .as_ref()
            .ok_or_else(|| Error::store("the credential store has not been initialized"))?;
        self.store.save(path, &staged)?;
        self.directory = staged;

        Ok(user)
    }

    /// Authenticate an existing user
    ///
    /// Validation runs before the lookup, so malformed credentials are
    /// rejected even when the account exists.
    pub fn login(&self, username: &str, password: &str) -> Result<User> {
        Self::validate(username, password)?;

        let record = self
            .directory
            .find(username)
            .ok_or_else(|| Error::UnknownUser(username.to_string()))?;

        if self.hasher.digest(password)? != record.password_digest {
            return Err(Error::WrongPassword);
        }

        Ok(User::new(record.id, &record.username))
    }

    fn validate(username: &str, password: &str) -> Result<()> {
        if username.trim().is_empty() || password.trim().is_empty() {
            return Err(Self::validation_error(username, password));
        }

        if !username_pattern().is_match(username) || !Self::password_ok(password) {
            return Err(Self::validation_error(username, password));
        }

        Ok(())
    }

    /// Password grammar: 3-20 chars from `[A-Za-z0-9@$!%*?&]` with at
    /// least one lowercase, one uppercase, one digit, and one symbol.
    fn password_ok(password: &str) -> bool {
        let length = password.chars().count();
        if !(3..=20).contains(&length) {
            return false;
        }

        if !password
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || PASSWORD_SYMBOLS.contains(c))
        {
            return false;
        }

        password.chars().any(|c| c.is_ascii_lowercase())
            && password.chars().any(|c| c.is_ascii_uppercase())
            && password.chars().any(|c| c.is_ascii_digit())
            && password.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
    }

    fn validation_error(username: &str, password: &str) -> Error {
        Error::validation(format!(
            "Registration input is incorrect. Username input '{username}', password input '{password}'."
        ))
    }
}
