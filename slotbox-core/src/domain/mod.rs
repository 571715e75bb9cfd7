//! Core domain entities
//!
//! All business entities are defined here. These are pure data
//! structures with validation logic - no I/O or external dependencies.

mod command;
mod outcome;
mod registry;
mod user;
mod wallet;
pub mod result;

pub use command::Command;
pub use outcome::SpinOutcome;
pub use registry::{CredentialRecord, RegistrationDirectory};
pub use user::User;
pub use wallet::Withdrawal;
