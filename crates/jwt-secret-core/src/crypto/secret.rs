//! The derived secret.

use zeroize::ZeroizeOnDrop;

use crate::SECRET_LENGTH;

/// A 32-character lowercase hexadecimal JWT signing secret.
///
/// Always exactly [`SECRET_LENGTH`] characters. The buffer is zeroized when
/// dropped and cannot be cleared earlier. `Debug` output is redacted and
/// there is no `Display` impl; reading the value takes an explicit call to
/// [`Secret::expose`].
#[derive(Clone, PartialEq, Eq, ZeroizeOnDrop)]
pub struct Secret {
    value: String,
}

impl Secret {
    /// Wrap an already-truncated hex string.
    ///
    /// The caller guarantees `value` is exactly `SECRET_LENGTH` lowercase hex
    /// characters.
    pub(crate) fn from_hex(value: &str) -> Self {
        debug_assert_eq!(value.len(), SECRET_LENGTH);
        Self {
            value: value.to_owned(),
        }
    }

    /// Get the secret as a string slice.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Hand it straight to whatever signs
    /// or displays it.
    pub fn expose(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Secret").field(&"[REDACTED]").finish()
    }
}
