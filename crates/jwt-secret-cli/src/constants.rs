//! Constants used throughout the CLI.

/// Environment variable read for the passphrase when nothing else is configured.
pub const DEFAULT_PASSPHRASE_ENV: &str = "PAYLOAD_SECRET";

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "JWT_SECRET_CONFIG";

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, used by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Resource not found (explicitly requested config file).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input (empty passphrase, no passphrase source).
    pub const INVALID_INPUT: i32 = 4;

    /// The SHA-256 primitive could not be invoked.
    pub const HASH_UNAVAILABLE: i32 = 5;
}
