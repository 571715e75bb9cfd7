//! Integration tests for slotbox-core services
//!
//! These tests run the real adapters end to end: the JSON file store
//! and the SHA-256 hasher against a temporary data directory, driven
//! through the session state machine exactly as the CLI drives it.
//!
//! Run with: cargo test --test integration_tests -- --nocapture

use tempfile::TempDir;

use slotbox_core::adapters::{JsonFileStore, Sha256Hasher};
use slotbox_core::ports::RegistryStore;
use slotbox_core::services::{AuthService, Session, SlotGame, WalletService};
use slotbox_core::{RegistrationDirectory, SlotboxContext};

// ============================================================================
// Test Helpers
// ============================================================================

/// Build a session backed by real adapters in the given directory
fn create_session(temp_dir: &TempDir) -> Session {
    let mut auth = AuthService::new(
        Box::new(JsonFileStore::new()),
        Box::new(Sha256Hasher::new()),
    );
    auth.initialize(temp_dir.path().join("data.json"))
        .expect("Failed to initialize credential store");
    Session::new(auth, WalletService::new(), SlotGame::with_seed(7))
}

// ============================================================================
// Registration Persistence Tests
// ============================================================================

#[test]
fn test_signup_survives_process_restart() {
    let temp_dir = TempDir::new().unwrap();

    let mut first = create_session(&temp_dir);
    let reply = first.dispatch("signup Player1 Passw0rd!");
    assert_eq!(reply.message, "Hello, Player1. Enjoy the game!");
    drop(first);

    // A fresh session over the same directory sees the registration
    let mut second = create_session(&temp_dir);
    let reply = second.dispatch("signin Player1 Passw0rd!");
    assert_eq!(reply.message, "Hi, Player1. Nice to see you again.");
}

#[test]
fn test_persisted_directory_stores_digest_not_password() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = create_session(&temp_dir);
    session.dispatch("signup Player1 Passw0rd!");

    let store = JsonFileStore::new();
    let directory: RegistrationDirectory =
        store.load(&temp_dir.path().join("data.json")).unwrap();
    assert_eq!(directory.users.len(), 1);
    assert_eq!(directory.users[0].username, "Player1");
    assert_ne!(directory.users[0].password_digest, "Passw0rd!");
    assert!(!directory.users[0].password_digest.contains("Passw0rd"));
}

#[test]
fn test_duplicate_signup_across_sessions() {
    let temp_dir = TempDir::new().unwrap();

    let mut first = create_session(&temp_dir);
    first.dispatch("signup Player1 Passw0rd!");

    let mut second = create_session(&temp_dir);
    let reply = second.dispatch("signup player1 Other1@x");
    assert_eq!(reply.message, "The user name 'player1' already exists.");
}

#[test]
fn test_corrupt_data_file_fails_initialization() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("data.json"), "{ broken").unwrap();

    let mut auth = AuthService::new(
        Box::new(JsonFileStore::new()),
        Box::new(Sha256Hasher::new()),
    );
    let result = auth.initialize(temp_dir.path().join("data.json"));
    assert!(result.is_err());
}

// ============================================================================
// Full Session Scenarios
// ============================================================================

#[test]
fn test_deposit_withdraw_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = create_session(&temp_dir);

    session.dispatch("signup Player1 Passw0rd!");

    let reply = session.dispatch("deposit 100.00");
    assert!(reply.message.ends_with("$100.00"));

    let reply = session.dispatch("withdraw 150.00");
    assert_eq!(reply.message, "Cannot withdraw. The balance is 100.00.");

    let reply = session.dispatch("withdraw 40.00");
    assert!(reply.message.ends_with("$60.00"));
}

#[test]
fn test_wallet_resets_between_logins() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = create_session(&temp_dir);

    session.dispatch("signup Player1 Passw0rd!");
    session.dispatch("deposit 100.00");

    // Signing in again re-creates the wallet at zero
    session.dispatch("signin Player1 Passw0rd!");
    let reply = session.dispatch("withdraw 1.00");
    assert_eq!(reply.message, "Cannot withdraw. The balance is 0.00.");
}

#[test]
fn test_bet_round_settles_against_the_ledger() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = create_session(&temp_dir);

    session.dispatch("signup Player1 Passw0rd!");
    session.dispatch("deposit 100.00");

    let reply = session.dispatch("bet 10.00");
    assert!(
        reply.message.starts_with("Congrats") || reply.message.starts_with("No luck this time!"),
        "unexpected bet reply: {}",
        reply.message
    );

    let reply = session.dispatch("bet 1000.00");
    assert_eq!(
        reply.message,
        "Insufficient balance. Deposit funds to continue playing."
    );
}

#[test]
fn test_anonymous_session_is_fenced_off() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = create_session(&temp_dir);

    for line in ["deposit 10", "withdraw 10", "bet 10"] {
        assert_eq!(session.dispatch(line).message, "You must login first.");
    }
    assert!(session.current_user().is_none());
}

#[test]
fn test_exit_and_unknown_commands() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = create_session(&temp_dir);

    let reply = session.dispatch("jackpot");
    assert_eq!(
        reply.message,
        "The command 'jackpot' is not valid. Type 'help' to see available commands."
    );
    assert!(!reply.halt);

    let reply = session.dispatch("exit");
    assert!(reply.halt);
}

// ============================================================================
// Context Assembly Tests
// ============================================================================

#[test]
fn test_context_starts_on_empty_directory() {
    let temp_dir = TempDir::new().unwrap();
    let mut ctx = SlotboxContext::new(temp_dir.path()).unwrap();

    let reply = ctx.session.dispatch("signup Player1 Passw0rd!");
    assert_eq!(reply.message, "Hello, Player1. Enjoy the game!");
    assert!(temp_dir.path().join("data.json").exists());
}

#[test]
fn test_context_honors_configured_registry_file() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("settings.json"),
        r#"{ "registryFile": "players.json" }"#,
    )
    .unwrap();

    let mut ctx = SlotboxContext::new(temp_dir.path()).unwrap();
    ctx.session.dispatch("signup Player1 Passw0rd!");

    assert!(temp_dir.path().join("players.json").exists());
    assert!(!temp_dir.path().join("data.json").exists());
}

#[test]
fn test_context_fails_on_corrupt_registry() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("data.json"), "[1, 2, oops").unwrap();

    assert!(SlotboxContext::new(temp_dir.path()).is_err());
}
