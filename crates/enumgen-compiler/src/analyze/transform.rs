//! Display name derivation.

use crate::TransformMode;

/// Map a raw identifier to its display name.
///
/// `prefix` is stripped when the identifier starts with it; a mismatch leaves
/// the identifier untouched.
pub fn transform(raw_name: &str, prefix: &str, mode: TransformMode) -> String {
    let stripped = if prefix.is_empty() {
        raw_name
    } else {
        raw_name.strip_prefix(prefix).unwrap_or(raw_name)
    };
    mode.apply(stripped)
}
