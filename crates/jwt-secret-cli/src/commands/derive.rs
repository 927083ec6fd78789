use jwt_secret_core::{derive, SecretError};

use crate::app::{passphrase_env_name, read_passphrase_for, AppContext};
use crate::cli::DeriveArgs;
use crate::errors::CliError;
use crate::output::{secret_json, secret_lines};
use crate::ui::print;

pub fn handle_derive(ctx: &AppContext, args: &DeriveArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(args.json, args.format);
    let config = ctx.config()?;

    let configured_env = config.input.env_var.as_deref();
    let (passphrase, source) = read_passphrase_for(args, configured_env)?;
    tracing::info!(source = source.as_str(), "deriving JWT secret");

    let secret = derive(&passphrase).map_err(|err| match err {
        SecretError::EmptyInput => CliError::invalid_input_with_hint(
            err.to_string(),
            source.empty_hint(passphrase_env_name(args, configured_env)),
        ),
        other => CliError::from(other),
    })?;

    if ui_ctx.mode.is_json() {
        let output = serde_json::to_string_pretty(&secret_json(&secret))?;
        println!("{}", output);
        return Ok(());
    }

    for line in secret_lines(&ui_ctx, &secret, ctx.quiet()) {
        print(&ui_ctx, &line);
    }
    Ok(())
}
