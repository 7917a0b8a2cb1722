use super::normalizer::normalize_text;
use crate::taxonomy::{self, DecisionKind};

/// Maps a bulletin detail text to its transfer-scenario category.
///
/// The taxonomy is scanned in declaration order and the first category with
/// any keyword appearing as a substring of the normalized text wins, so a
/// text matching two categories always resolves to the earlier one. Pure
/// function of the text and the static table.
pub fn classify(text: &str) -> DecisionKind {
    let normalized = normalize_text(text);
    if normalized.is_empty() {
        return DecisionKind::Unclassified;
    }

    for entry in taxonomy::ordered() {
        if entry
            .keywords
            .iter()
            .any(|keyword| normalized.contains(keyword))
        {
            return entry.kind;
        }
    }

    DecisionKind::Unclassified
}
