//! Inverse expansion: compact notation back to readable phrasing.
//!
//! Purely textual replacement. Expansion is lossy by design — it restores
//! field semantics, not the original wording — and never fails: unknown
//! tags and malformed notation pass through unchanged.

use regex::Regex;
use std::sync::LazyLock;

/// Tag templates. Values are `\w+` runs, so `Senior_Dev` survives whole.
const TEMPLATES: &[(&str, &str)] = &[
    (r"ACT:(\w+)", "Act as $1"),
    (r"OBJ:(\w+)", "Objective: $1"),
    (r"LIM:(\w+)", "Limit: $1"),
    (r"CTX:(\w+)", "Context: $1"),
    (r"OUT:(\w+)", "Output format: $1"),
    (r"SUM:(\w+)", "Summarize: $1"),
    (r"GEN:(\w+)", "Generate: $1"),
    (r"EVAL:(\w+)", "Evaluate: $1"),
    (r"THINK:(\w+)", "Reasoning: $1"),
    (r"VIS:(\w+)", "Visualize: $1"),
    (r"=>", "leading to"),
    (r"->", "becomes"),
    (r"\|", "and then"),
    (r"@(\w+)", "at $1"),
];

static RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    TEMPLATES
        .iter()
        .map(|(pat, rep)| (Regex::new(pat).unwrap(), *rep))
        .collect()
});

/// Expand compact notation into readable English phrasing.
pub fn expand(notation: &str) -> String {
    let mut text = notation.to_string();
    for (re, rep) in RULES.iter() {
        text = re.replace_all(&text, *rep).into_owned();
    }
    text
}
