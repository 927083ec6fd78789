//! jwt-secret CLI - derive the JWT signing secret a PayloadCMS backend uses
//!
//! This is the command-line interface for jwt-secret. It solicits the payload
//! secret, calls the core deriver, and prints the result.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::Parser;

use crate::app::{resolve_config_path, AppContext};
use crate::cli::{Cli, Commands};
use crate::commands::{derive, misc};
use crate::errors::CliError;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    // The subscriber needs `[log] level`, so the config is read before it is
    // installed. A config error is swallowed here and reported by `derive`,
    // the only command that uses the config.
    let configured_level = ctx
        .config()
        .ok()
        .and_then(|config| config.log.level.clone());
    logging::init(cli.verbose, configured_level.as_deref());
    tracing::debug!(config = %resolve_config_path(&cli), "config resolved");

    if let Err(e) = run(&ctx, &cli) {
        let (json, format) = match &cli.command {
            Some(Commands::Derive(args)) => (args.json, args.format),
            _ => (false, None),
        };
        let ui_ctx = ctx.ui_context(json, format);

        match e.downcast_ref::<CliError>() {
            Some(cli_err) => {
                tracing::debug!(kind = cli_err.kind(), "command failed");
                print_error(&ui_ctx, &cli_err.to_string(), cli_err.kind(), cli_err.hint());
                std::process::exit(cli_err.exit_code());
            }
            None => {
                print_error(&ui_ctx, &format!("{:#}", e), "error", None);
                std::process::exit(1);
            }
        }
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Derive(args)) => {
            derive::handle_derive(ctx, args)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args)?;
        }
        None => {
            misc::handle_quickstart()?;
        }
    }

    Ok(())
}
