//! Secret derivation: SHA-256, lowercase hex, first 32 characters.

use zeroize::Zeroizing;

use crate::crypto::digest::{HashProvider, Sha256Provider};
use crate::crypto::passphrase::validate_passphrase;
use crate::crypto::secret::Secret;
use crate::error::Result;
use crate::{ALGORITHM, SECRET_LENGTH};

/// Derive the JWT signing secret from a passphrase.
///
/// Hashes the UTF-8 bytes of `passphrase` with SHA-256, renders the digest as
/// 64 lowercase hex characters and keeps the first 32. The remaining 32
/// characters are discarded, not folded back in.
///
/// # Errors
///
/// Returns `SecretError::EmptyInput` if the passphrase is empty or only
/// whitespace.
///
/// # Examples
///
/// ```
/// use jwt_secret_core::crypto::derive;
///
/// let secret = derive("test").unwrap();
/// assert_eq!(secret.expose(), "9f86d081884c7d659a2feaa0c55ad015");
/// assert!(derive("   ").is_err());
/// ```
pub fn derive(passphrase: &str) -> Result<Secret> {
    derive_with(&Sha256Provider, passphrase)
}

/// Derive the secret using an explicit hash provider.
///
/// Validation runs before the provider is consulted, so an empty passphrase
/// is reported as `EmptyInput` even when the provider is broken.
///
/// # Errors
///
/// - `SecretError::EmptyInput` for empty or whitespace-only input
/// - `SecretError::HashUnavailable` if the provider cannot hash
pub fn derive_with<H: HashProvider>(provider: &H, passphrase: &str) -> Result<Secret> {
    validate_passphrase(passphrase)?;

    tracing::debug!(
        input_bytes = passphrase.len(),
        algorithm = ALGORITHM,
        "deriving secret"
    );

    let digest = Zeroizing::new(provider.sha256(passphrase.as_bytes()).map_err(|err| {
        tracing::warn!(error = err.kind(), "hash provider failed");
        err
    })?);
    let hex_digest = Zeroizing::new(hex::encode(&*digest));

    Ok(Secret::from_hex(&hex_digest[..SECRET_LENGTH]))
}

/// Derive the secret on tokio's blocking pool.
///
/// A task that panics or is cancelled by runtime shutdown is reported as
/// `HashUnavailable`; callers never observe a partial result.
#[cfg(feature = "tokio")]
pub async fn derive_async(passphrase: String) -> Result<Secret> {
    let passphrase = Zeroizing::new(passphrase);
    tokio::task::spawn_blocking(move || derive(&passphrase))
        .await
        .map_err(|err| {
            crate::error::SecretError::hash_unavailable(format!("derivation task failed: {}", err))
        })?
}
