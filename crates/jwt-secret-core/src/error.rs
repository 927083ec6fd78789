//! Error types for secret derivation.
//!
//! Only two things can go wrong: the caller handed us nothing to hash, or the
//! hash primitive could not be invoked. Errors are descriptive at the core
//! level; the CLI layer maps these to exit codes and user-facing messages.

use thiserror::Error;

/// Result type alias for derivation operations.
pub type Result<T> = std::result::Result<T, SecretError>;

/// Core error type for secret derivation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SecretError {
    /// The passphrase was empty or whitespace-only
    #[error("Passphrase cannot be empty")]
    EmptyInput,

    /// The SHA-256 primitive could not be invoked
    #[error("Hash primitive unavailable: {0}")]
    HashUnavailable(String),
}

impl SecretError {
    /// Create a HashUnavailable error with a reason.
    pub fn hash_unavailable(reason: impl Into<String>) -> Self {
        SecretError::HashUnavailable(reason.into())
    }

    /// Whether the caller can recover by supplying different input.
    ///
    /// `EmptyInput` is a caller error (re-prompt); `HashUnavailable` means the
    /// host is misconfigured and the call should not be retried.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, SecretError::EmptyInput)
    }

    /// Stable machine-readable name for this error.
    pub fn kind(&self) -> &'static str {
        match self {
            SecretError::EmptyInput => "empty_input",
            SecretError::HashUnavailable(_) => "hash_unavailable",
        }
    }
}
