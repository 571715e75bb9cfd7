//! SHA-256 adapter for the hasher port

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use sha2::{Digest, Sha256};

use crate::domain::result::{Error, Result};
use crate::ports::Hasher;

/// Hasher producing the base64-encoded SHA-256 digest of the input
///
/// Deliberately unsalted: the credential store only compares digests
/// for equality, and cryptographic strength is out of scope for the
/// hashing capability.
#[derive(Debug, Default, Clone)]
pub struct Sha256Hasher;

impl Sha256Hasher {
    pub fn new() -> Self {
        Self
    }
}

impl Hasher for Sha256Hasher {
    fn digest(&self, input: &str) -> Result<String> {
        if input.trim().is_empty() {
            return Err(Error::validation("Input cannot be empty."));
        }

        let mut hasher = Sha256::new();
        hasher.update(input.as_bytes());
        Ok(STANDARD.encode(hasher.finalize()))
    }
}
