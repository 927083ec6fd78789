//! Rendering primitives for CLI output.

use super::context::UiContext;
use super::mode::OutputMode;
use super::theme::{styled, styles, Badge};

/// Render a header line for a command: "jwt-secret · command".
///
/// Header, divider, key-value and hint lines only appear in pretty output;
/// plain output is the bare result.
pub fn header(ctx: &UiContext, command: &str) -> String {
    let title = styled("jwt-secret", styles::bold(), ctx.color);
    let separator = if ctx.unicode { "\u{00B7}" } else { "-" };
    format!("{} {} {}", title, separator, command)
}

/// Render a divider line.
pub fn divider(ctx: &UiContext) -> String {
    let line = if ctx.unicode { "\u{2500}" } else { "-" };
    line.repeat(ctx.width.min(60))
}

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let badge_text = kind.display(ctx.unicode);
    let colored_badge = styled(badge_text, kind.style(), ctx.color);

    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a key-value pair as "Key: value" with a dim key.
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    let styled_key = styled(&format!("{}:", key), styles::dim(), ctx.color);
    format!("{} {}", styled_key, value)
}

/// Render a hint line as "Hint: text" with a dim label.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    let label = styled("Hint:", styles::dim(), ctx.color);
    format!("{} {}", label, text)
}

/// Print a message to stdout with proper mode handling.
///
/// In JSON mode, this does nothing (JSON output should be handled separately).
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() {
        println!("{}", message);
    }
}

/// Format an error message with optional hint.
///
/// Pretty mode: "[ERR] message" with optional "Hint: ..." on next line
/// Plain mode: "error=message" with optional "hint=suggestion"
/// JSON mode: `{"error": message, "kind": kind, "hint": hint}`
pub fn error_message(
    ctx: &UiContext,
    message: &str,
    kind: &str,
    error_hint: Option<&str>,
) -> String {
    match ctx.mode {
        OutputMode::Json => serde_json::json!({
            "error": message,
            "kind": kind,
            "hint": error_hint,
        })
        .to_string(),
        OutputMode::Pretty => {
            let mut lines = vec![badge(ctx, Badge::Err, message)];
            if let Some(h) = error_hint {
                lines.push(hint(ctx, h));
            }
            lines.join("\n")
        }
        OutputMode::Plain => {
            let mut lines = vec![format!("error={}", message)];
            if let Some(h) = error_hint {
                lines.push(format!("hint={}", h));
            }
            lines.join("\n")
        }
    }
}

/// Print an error message to stderr with optional hint.
pub fn print_error(ctx: &UiContext, message: &str, kind: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, kind, error_hint));
}
