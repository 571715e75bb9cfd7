//! Hasher port - password digest abstraction

use crate::domain::result::Result;

/// One-way digest capability used by the credential store
///
/// Implementations must be deterministic (same input, same output) and
/// not reversible. Cryptographic strength is not required by the
/// store; it only ever compares digests for equality.
pub trait Hasher {
    /// Digest the input; fails on an empty or whitespace-only input
    fn digest(&self, input: &str) -> Result<String>;
}
