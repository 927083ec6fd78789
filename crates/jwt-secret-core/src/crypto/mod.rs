//! Secret derivation.
//!
//! This module turns a passphrase into the 32-character JWT signing secret:
//! - **passphrase**: rejects empty and whitespace-only input
//! - **digest**: the SHA-256 capability (`HashProvider`), backed by `sha2`
//! - **derive**: hash, hex-encode, truncate
//! - **secret**: the output type, zeroized on drop and redacted in `Debug`
//!
//! ## Security Model
//!
//! - Deterministic: no salt, no randomness, no state between calls
//! - The passphrase, digest and secret are never logged
//! - Intermediate buffers are zeroized once the secret has been produced
//!
//! This is a compatibility derivation, not a password KDF. It does nothing to
//! slow down brute-force guessing of a weak passphrase.

pub mod derive;
pub mod digest;
pub mod passphrase;
pub mod secret;

pub use derive::{derive, derive_with};
pub use digest::{HashProvider, Sha256Provider};
pub use passphrase::validate_passphrase;
pub use secret::Secret;

#[cfg(feature = "tokio")]
pub use derive::derive_async;
