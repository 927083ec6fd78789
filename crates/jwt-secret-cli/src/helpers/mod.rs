//! Helper functions for the CLI.

mod input;

pub use input::{env_passphrase, prompt_passphrase, read_passphrase};
