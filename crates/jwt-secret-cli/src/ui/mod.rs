//! UI primitives for the jwt-secret CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badges and color styles
//! - **Render**: Headers, key-value lines, hints, errors
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::{UiContext, UiOptions};
//! use crate::ui::render::{header, kv, hint};
//!
//! let ctx = UiContext::from_env(UiOptions { json: args.json, ..UiOptions::default() });
//!
//! if ctx.mode.is_json() {
//!     // Handle JSON output separately
//!     return Ok(());
//! }
//!
//! println!("{}", header(&ctx, "derive"));
//! println!("{}", kv(&ctx, "Secret", secret.expose()));
//! ```

mod context;
mod mode;
pub mod render;
pub mod theme;

pub use context::{UiContext, UiOptions};
pub use mode::OutputMode;
pub use theme::Badge;

pub use render::{badge, divider, header, hint, kv, print, print_error};
