use unicode_normalization::UnicodeNormalization;

/// Canonical matching form: NFC, trimmed, collapsed whitespace, lower-case.
/// The stored detail text keeps its original casing; this form exists only
/// for keyword matching.
pub(crate) fn normalize_text(value: &str) -> String {
    let composed: String = value.nfc().collect();
    let collapsed = composed.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_lowercase()
}
