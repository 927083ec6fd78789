//! SHA-256 hash capability.
//!
//! The deriver does not call `sha2` directly. It asks a [`HashProvider`] for
//! the digest, so a host that cannot supply the primitive can report
//! `HashUnavailable` instead of panicking.

use sha2::{Digest, Sha256};

use crate::error::Result;

/// Length of a SHA-256 digest in bytes.
pub const DIGEST_LENGTH: usize = 32;

/// Supplies SHA-256 over an arbitrary-length byte sequence.
pub trait HashProvider {
    /// Hash `data` and return the 32-byte digest.
    ///
    /// # Errors
    ///
    /// Returns `SecretError::HashUnavailable` if the primitive cannot be
    /// invoked. Implementations must not fail for any other reason.
    fn sha256(&self, data: &[u8]) -> Result<[u8; DIGEST_LENGTH]>;
}

/// Default provider backed by the RustCrypto `sha2` crate. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Provider;

impl HashProvider for Sha256Provider {
    fn sha256(&self, data: &[u8]) -> Result<[u8; DIGEST_LENGTH]> {
        Ok(Sha256::digest(data).into())
    }
}
