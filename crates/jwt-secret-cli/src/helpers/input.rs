//! Passphrase input helpers.

use std::env::VarError;
use std::io::Read;

use dialoguer::Password;
use jwt_secret_core::validate_passphrase;
use zeroize::Zeroizing;

use crate::errors::CliError;

/// Prompt for the passphrase on the terminal without echoing it.
///
/// Empty input is accepted here so the core can report it as `EmptyInput`
/// with the same message every other source gets.
pub fn prompt_passphrase() -> anyhow::Result<Zeroizing<String>> {
    Password::new()
        .with_prompt("Payload secret")
        .allow_empty_password(true)
        .interact()
        .map(Zeroizing::new)
        .map_err(|e| anyhow::anyhow!("Failed to read passphrase: {}", e))
}

/// Read the passphrase from a reader (stdin in practice).
pub fn read_passphrase<R: Read>(mut reader: R) -> anyhow::Result<Zeroizing<String>> {
    let mut buffer = Zeroizing::new(String::new());
    reader
        .read_to_string(&mut *buffer)
        .map_err(|e| anyhow::anyhow!("Failed to read passphrase from stdin: {}", e))?;
    strip_line_ending(&mut *buffer);
    Ok(buffer)
}

/// Remove exactly one trailing `\n` or `\r\n`.
///
/// `echo secret | jwt-secret derive --stdin` must derive from `secret`, not
/// `secret\n`. Any other surrounding whitespace is part of the passphrase.
pub fn strip_line_ending(value: &mut String) {
    if value.ends_with('\n') {
        value.pop();
        if value.ends_with('\r') {
            value.pop();
        }
    }
}

/// Read a passphrase from an environment variable.
///
/// Unset and blank variables yield `None`. A variable holding bytes that are
/// not UTF-8 is an input error rather than a missing value.
pub fn env_passphrase(name: &str) -> anyhow::Result<Option<Zeroizing<String>>> {
    match std::env::var(name) {
        Ok(value) => {
            let value = Zeroizing::new(value);
            Ok(validate_passphrase(&value).is_ok().then_some(value))
        }
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(CliError::invalid_input_with_hint(
            format!("{} is not valid UTF-8", name),
            format!("Set {} to a UTF-8 value or pipe it with --stdin.", name),
        )
        .into()),
    }
}
