//! Command handlers.

pub mod derive;
pub mod misc;
