//! Logging setup.
//!
//! Logs go to stderr so stdout carries only the command result. Log events
//! never include the passphrase or the derived secret.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Map `-v` occurrences to a filter directive.
pub fn verbosity_level(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Pick the filter: `RUST_LOG`, then `-v`, then `[log] level`, then `warn`.
pub fn filter_directive(rust_log: Option<&str>, verbose: u8, configured: Option<&str>) -> String {
    if let Some(value) = rust_log.filter(|v| !v.trim().is_empty()) {
        return value.to_string();
    }
    verbosity_level(verbose)
        .or(configured)
        .unwrap_or("warn")
        .to_string()
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbose: u8, configured: Option<&str>) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let directive = filter_directive(rust_log.as_deref(), verbose, configured);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
