//! Result and error types for the core library

use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

/// Core library error type
///
/// Every failure condition a service can produce is a distinct variant
/// so callers can route business outcomes (duplicate username, wrong
/// password, ...) differently from resource faults (io, corrupt data).
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    #[error("The user name '{0}' already exists.")]
    DuplicateUsername(String),

    #[error("The user '{0}' is not registered.")]
    UnknownUser(String),

    #[error("Wrong username or password.")]
    WrongPassword,

    #[error("The amount must be a positive number. Passed value is {0}.")]
    InvalidAmount(Decimal),

    #[error("Wallet for player id '{0}' was not created.")]
    WalletNotFound(Uuid),

    #[error("The amount must be a positive number greater than zero. Passed value is {0}.")]
    InvalidBet(Decimal),

    #[error("The input command can not be empty.")]
    EmptyInput,

    #[error("Amount arithmetic overflowed.")]
    Overflow,

    #[error("Data store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a data store error
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_username_message() {
        let err = Error::DuplicateUsername("Player1".to_string());
        assert_eq!(err.to_string(), "The user name 'Player1' already exists.");
    }

    #[test]
    fn test_invalid_amount_message_carries_value() {
        let err = Error::InvalidAmount(Decimal::new(-5, 0));
        assert!(err.to_string().contains("-5"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
