use clap::CommandFactory;
use clap_complete::generate;

use jwt_secret_core::VERSION;

use crate::cli::{Cli, CompletionsArgs};

pub fn handle_completions(args: &CompletionsArgs) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "jwt-secret", &mut std::io::stdout());
    Ok(())
}

pub fn handle_quickstart() -> anyhow::Result<()> {
    println!("jwt-secret v{}", VERSION);
    println!("\nQuickstart:");
    println!("  jwt-secret derive");
    println!("  PAYLOAD_SECRET=... jwt-secret derive");
    println!("  echo \"$PAYLOAD_SECRET\" | jwt-secret derive --stdin --json");
    println!("\nRun `jwt-secret --help` for full usage.");
    Ok(())
}
