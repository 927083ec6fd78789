//! Passphrase source resolution.

use std::io::IsTerminal;

use zeroize::Zeroizing;

use crate::cli::DeriveArgs;
use crate::constants::DEFAULT_PASSPHRASE_ENV;
use crate::errors::CliError;
use crate::helpers::{env_passphrase, prompt_passphrase, read_passphrase};

/// Where the passphrase came from. Logged; the value never is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassphraseSource {
    Stdin,
    Env,
    Prompt,
}

impl PassphraseSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            PassphraseSource::Stdin => "stdin",
            PassphraseSource::Env => "env",
            PassphraseSource::Prompt => "prompt",
        }
    }

    /// Hint for a passphrase from this source that turned out blank.
    pub fn empty_hint(&self, env_name: &str) -> String {
        match self {
            PassphraseSource::Stdin => "Pipe a non-blank value with --stdin.".to_string(),
            PassphraseSource::Env => format!("Set {} to a non-blank value.", env_name),
            PassphraseSource::Prompt => {
                format!("Enter the value of your {} environment variable.", env_name)
            }
        }
    }
}

/// Pick the environment variable to read: `--env`, then config, then default.
pub fn passphrase_env_name<'a>(args: &'a DeriveArgs, configured: Option<&'a str>) -> &'a str {
    args.env
        .as_deref()
        .or(configured)
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(DEFAULT_PASSPHRASE_ENV)
}

/// Obtain the passphrase.
///
/// Order: `--stdin`, then the environment variable, then a hidden prompt when
/// stdin is a terminal and `--no-input` is not set.
pub fn read_passphrase_for(
    args: &DeriveArgs,
    configured_env: Option<&str>,
) -> anyhow::Result<(Zeroizing<String>, PassphraseSource)> {
    if args.stdin {
        let passphrase = read_passphrase(std::io::stdin().lock())?;
        return Ok((passphrase, PassphraseSource::Stdin));
    }

    let env_name = passphrase_env_name(args, configured_env);
    if let Some(passphrase) = env_passphrase(env_name)? {
        tracing::debug!(variable = env_name, "passphrase taken from environment");
        return Ok((passphrase, PassphraseSource::Env));
    }

    let interactive = std::io::stdin().is_terminal() && !args.no_input;
    if !interactive {
        return Err(CliError::invalid_input_with_hint(
            "No passphrase provided and no TTY available.",
            format!("Set {} or pipe the value with --stdin.", env_name),
        )
        .into());
    }

    let passphrase = prompt_passphrase()?;
    Ok((passphrase, PassphraseSource::Prompt))
}
