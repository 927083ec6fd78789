//! Application context for the jwt-secret CLI.
//!
//! Provides a unified context that combines CLI arguments with the
//! lazily-loaded config file.

use once_cell::unsync::OnceCell;

use crate::cli::Cli;
use crate::config::{JwtSecretConfig, OutputFormat};
use crate::ui::{UiContext, UiOptions};

use super::resolver::load_config;

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<JwtSecretConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&JwtSecretConfig> {
        self.config.get_or_try_init(|| load_config(self.cli))
    }

    /// Build the UI context for a command.
    ///
    /// Config values are only consulted if the config loaded cleanly, so an
    /// error about a broken config can still be rendered.
    pub fn ui_context(&self, json: bool, format: Option<OutputFormat>) -> UiContext {
        let config = self.config().ok();
        UiContext::from_env(UiOptions {
            json,
            format,
            config_format: config.and_then(|c| c.ui.format),
            no_color: self.cli.no_color,
            ascii: self.cli.ascii || config.map(|c| c.ui.ascii).unwrap_or(false),
        })
    }
}
