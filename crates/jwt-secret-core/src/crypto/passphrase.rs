//! Passphrase validation.

use crate::error::{Result, SecretError};

/// Validate that a passphrase has something to hash.
///
/// # Requirements
///
/// - Not empty
/// - Not only whitespace
///
/// Whitespace here is the set a browser's `String.prototype.trim` strips:
/// Unicode space separators, tab, vertical tab, form feed, no-break space,
/// the byte order mark U+FEFF, and the line terminators LF, CR, U+2028 and
/// U+2029. NEL (U+0085) is not whitespace, so a passphrase of NELs is hashed.
///
/// Validation never alters the passphrase: a valid passphrase is hashed
/// exactly as given, surrounding whitespace included.
///
/// # Examples
///
/// ```
/// use jwt_secret_core::crypto::validate_passphrase;
///
/// assert!(validate_passphrase("my-payload-secret").is_ok());
/// assert!(validate_passphrase("   ").is_err());
/// ```
pub fn validate_passphrase(passphrase: &str) -> Result<()> {
    if passphrase.chars().all(is_trimmable) {
        return Err(SecretError::EmptyInput);
    }
    Ok(())
}

fn is_trimmable(c: char) -> bool {
    match c {
        '\u{0085}' => false,
        '\u{FEFF}' => true,
        _ => c.is_whitespace(),
    }
}
