//! Config file resolution.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{default_config_path, read_config, JwtSecretConfig};
use crate::constants::CONFIG_ENV;
use crate::errors::CliError;

/// Where the config file is expected to live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLocation {
    /// Given via `--config` or `JWT_SECRET_CONFIG`; must exist
    Explicit(PathBuf),
    /// The XDG default; optional
    Default(PathBuf),
    /// No default could be computed (HOME unset)
    None,
}

impl fmt::Display for ConfigLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigLocation::Explicit(path) => write!(f, "{} (explicit)", path.display()),
            ConfigLocation::Default(path) if path.exists() => write!(f, "{}", path.display()),
            ConfigLocation::Default(path) => write!(f, "{} (absent, defaults)", path.display()),
            ConfigLocation::None => write!(f, "none (defaults)"),
        }
    }
}

/// Resolve the config file path from CLI args/env or the XDG default.
pub fn resolve_config_path(cli: &Cli) -> ConfigLocation {
    if let Some(value) = cli.config.as_deref() {
        if !value.trim().is_empty() {
            return ConfigLocation::Explicit(PathBuf::from(value));
        }
    }
    match default_config_path() {
        Ok(path) => ConfigLocation::Default(path),
        Err(_) => ConfigLocation::None,
    }
}

/// Load the config, falling back to defaults when no default file exists.
pub fn load_config(cli: &Cli) -> anyhow::Result<JwtSecretConfig> {
    match resolve_config_path(cli) {
        ConfigLocation::Explicit(path) => {
            if !path.exists() {
                return Err(CliError::not_found(
                    missing_config_message(&path),
                    format!("Check --config or unset {}.", CONFIG_ENV),
                )
                .into());
            }
            read_config(&path)
        }
        ConfigLocation::Default(path) if path.exists() => read_config(&path),
        ConfigLocation::Default(_) | ConfigLocation::None => Ok(JwtSecretConfig::default()),
    }
}

/// Error message when an explicitly requested config file is missing.
pub fn missing_config_message(config_path: &Path) -> String {
    format!("Config file not found: {}", config_path.display())
}
