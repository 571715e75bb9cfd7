//! Slotbox Core - business logic for the command-line wagering game
//!
//! This crate implements the core domain logic following hexagonal
//! architecture:
//!
//! - **domain**: Core business entities (User, RegistrationDirectory,
//!   Command, SpinOutcome, ...)
//! - **ports**: Trait definitions for external dependencies
//!   (RegistryStore, Hasher)
//! - **services**: Business logic orchestration (auth, wallet, slot
//!   game, session state machine, event logging)
//! - **adapters**: Concrete implementations (JSON file store, SHA-256
//!   hasher, in-memory store)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;

use adapters::{JsonFileStore, Sha256Hasher};
use config::Config;
use services::{AuthService, Session, SlotGame, WalletService};

// Re-export commonly used types at crate root
pub use domain::result::{Error, Result};
pub use domain::{Command, CredentialRecord, RegistrationDirectory, SpinOutcome, User, Withdrawal};
pub use services::{EntryPoint, LogEvent, LoggingService, Reply};

/// Main context for Slotbox operations
///
/// This is the primary entry point: it wires the file store and hasher
/// into the credential store, loads the registration directory, and
/// assembles the session state machine.
pub struct SlotboxContext {
    pub config: Config,
    pub session: Session,
}

impl SlotboxContext {
    /// Create a new Slotbox context rooted at the given data directory
    pub fn new(data_dir: &Path) -> anyhow::Result<Self> {
        let config = Config::load(data_dir)?;

        let mut auth = AuthService::new(
            Box::new(JsonFileStore::new()),
            Box::new(Sha256Hasher::new()),
        );
        auth.initialize(data_dir.join(&config.registry_file))?;

        let session = Session::new(auth, WalletService::new(), SlotGame::new());

        Ok(Self { config, session })
    }
}
