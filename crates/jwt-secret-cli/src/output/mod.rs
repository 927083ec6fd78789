//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying a derived
//! secret in the supported formats (JSON, plain, pretty).

mod json;
mod text;

// Re-export public API
pub use json::secret_json;
pub use text::secret_lines;
