use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use jwt_secret_core::VERSION;

use crate::config::OutputFormat;

/// jwt-secret - Derive the JWT signing secret a PayloadCMS backend uses
#[derive(Parser)]
#[command(name = "jwt-secret")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file
    #[arg(long, global = true, env = "JWT_SECRET_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Arguments for the `derive` command
#[derive(Args)]
pub struct DeriveArgs {
    /// Read the passphrase from stdin (one trailing newline is stripped)
    #[arg(long)]
    pub stdin: bool,

    /// Environment variable holding the passphrase
    #[arg(long, value_name = "NAME")]
    pub env: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format
    #[arg(long, value_name = "FORMAT", value_enum)]
    pub format: Option<OutputFormat>,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Derive the JWT signing secret from a payload secret
    Derive(DeriveArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
