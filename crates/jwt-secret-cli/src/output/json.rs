//! JSON output formatting for derived secrets.

use jwt_secret_core::{Secret, ALGORITHM, SECRET_LENGTH};

/// Convert a secret to JSON for output.
pub fn secret_json(secret: &Secret) -> serde_json::Value {
    serde_json::json!({
        "secret": secret.expose(),
        "algorithm": ALGORITHM,
        "length": SECRET_LENGTH,
    })
}
