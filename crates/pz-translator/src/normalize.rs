//! Whitespace and case normalization.

use regex::Regex;
use std::sync::LazyLock;

static RE_WS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Collapse whitespace runs to single spaces, trim, and lowercase.
///
/// Runs once at the head of the pipeline; all downstream matching assumes
/// lowercased text. Idempotent: normalizing already-normalized text is a
/// no-op.
pub fn normalize(text: &str) -> String {
    squeeze(text).to_lowercase()
}

/// Whitespace-only cleanup: collapse runs, trim.
///
/// Used after substitution and extraction stages, which may leave gaps but
/// also introduce cased tokens (`Py`, `JSON`) that must survive. Idempotent.
pub fn squeeze(text: &str) -> String {
    RE_WS.replace_all(text, " ").trim().to_string()
}
