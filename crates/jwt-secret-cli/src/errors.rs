//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use jwt_secret_core::SecretError;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (config file given explicitly)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput {
        message: String,
        hint: Option<String>,
    },

    /// Hash primitive unavailable on this host
    HashUnavailable(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, .. } => write!(f, "{}", message),
            CliError::InvalidInput { message, .. } => write!(f, "{}", message),
            CliError::HashUnavailable(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl From<SecretError> for CliError {
    fn from(err: SecretError) -> Self {
        match err {
            SecretError::EmptyInput => CliError::invalid_input_with_hint(
                err.to_string(),
                "Provide a payload secret that is not blank.",
            ),
            SecretError::HashUnavailable(_) => CliError::HashUnavailable(err.to_string()),
        }
    }
}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error with message and hint.
    pub fn invalid_input_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Hint to show under the message, if any.
    pub fn hint(&self) -> Option<&str> {
        match self {
            CliError::NotFound { hint, .. } => Some(hint.as_str()),
            CliError::InvalidInput { hint, .. } => hint.as_deref(),
            CliError::HashUnavailable(_) => None,
        }
    }

    /// Stable machine-readable name, used in JSON error output.
    pub fn kind(&self) -> &'static str {
        match self {
            CliError::NotFound { .. } => "not_found",
            CliError::InvalidInput { .. } => "invalid_input",
            CliError::HashUnavailable(_) => "hash_unavailable",
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        use super::constants::exit_codes;
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput { .. } => exit_codes::INVALID_INPUT,
            CliError::HashUnavailable(_) => exit_codes::HASH_UNAVAILABLE,
        }
    }
}
