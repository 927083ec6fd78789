//! # JWT Secret Core
//!
//! Core library for jwt-secret - derives the fixed-length JWT signing secret a
//! PayloadCMS backend computes from its `PAYLOAD_SECRET`.
//!
//! The derivation is a pure function: SHA-256 over the UTF-8 bytes of the
//! passphrase, hex-encoded in lowercase, truncated to the first 32
//! characters. The same passphrase always yields the same secret on every
//! platform, so nothing needs to be stored.
//!
//! ## Architecture
//!
//! - **crypto**: passphrase validation, the hash capability, the deriver
//! - **error**: the two failure modes (`EmptyInput`, `HashUnavailable`)
//!
//! ## Example
//!
//! ```
//! use jwt_secret_core::derive;
//!
//! let secret = derive("test").unwrap();
//! assert_eq!(secret.expose(), "9f86d081884c7d659a2feaa0c55ad015");
//! ```
//!
//! ## Note on entropy
//!
//! Truncating the 64-character hex digest to 32 characters keeps 128 of the
//! digest's 256 bits. This is kept for compatibility with the backend, which
//! performs the same truncation.

pub mod crypto;
pub mod error;

pub use crypto::{derive, derive_with, validate_passphrase, HashProvider, Secret, Sha256Provider};
pub use error::{Result, SecretError};

#[cfg(feature = "tokio")]
pub use crypto::derive_async;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Length of a derived secret in characters.
pub const SECRET_LENGTH: usize = 32;

/// Stable identifier for the derivation, used in machine-readable output.
pub const ALGORITHM: &str = "sha256-hex-prefix-32";
