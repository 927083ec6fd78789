//! Application-level utilities for the jwt-secret CLI.
//!
//! This module provides:
//! - Application context for unified CLI + config handling
//! - Config file resolution
//! - Passphrase source resolution

mod context;
mod passphrase;
mod resolver;

// Re-export public API
pub use context::AppContext;
pub use passphrase::{passphrase_env_name, read_passphrase_for};
pub use resolver::resolve_config_path;
