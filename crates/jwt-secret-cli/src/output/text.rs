//! Text output formatting for derived secrets.

use jwt_secret_core::Secret;

use crate::ui::{badge, divider, header, hint, kv, Badge, UiContext};

/// Describes the derivation in human terms.
const ALGORITHM_LABEL: &str = "SHA-256 hash truncated to 32 characters";

/// Lines to print for a derived secret.
///
/// Plain mode and quiet mode print the bare secret so the output can be
/// captured by scripts. Pretty mode adds a header, the algorithm and a
/// reminder to keep the secret safe.
pub fn secret_lines(ctx: &UiContext, secret: &Secret, quiet: bool) -> Vec<String> {
    if quiet || !ctx.mode.is_pretty() {
        return vec![secret.expose().to_string()];
    }

    vec![
        header(ctx, "derive"),
        divider(ctx),
        badge(ctx, Badge::Ok, "JWT secret generated"),
        kv(ctx, "Secret", secret.expose()),
        kv(ctx, "Algorithm", ALGORITHM_LABEL),
        badge(
            ctx,
            Badge::Warn,
            "Truncation keeps 128 of the digest's 256 bits.",
        ),
        hint(
            ctx,
            "This is the signing secret your PayloadCMS backend uses for JWTs. Keep it secure!",
        ),
    ]
}
