//! Controlled-vocabulary canonicalizers for captured field values.
//!
//! Each canonicalizer lowercases its input, scans a priority-ordered
//! containment map, and falls back to a mechanical transliteration that
//! never yields an empty string for non-empty input.

use regex::Regex;
use std::sync::LazyLock;

/// Role phrases to canonical short tokens. Containment scan stops at the
/// first hit, so compound roles must precede their single-word suffixes.
const ROLE_CANON: &[(&str, &str)] = &[
    ("software architect", "Software_Architect"),
    ("senior developer", "Senior_Dev"),
    ("machine learning", "ML"),
    ("devops engineer", "DevOps_Eng"),
    ("data scientist", "Data_Scientist"),
    ("consultant", "Consultant"),
    ("researcher", "Researcher"),
    ("architect", "Architect"),
    ("scientist", "Scientist"),
    ("developer", "Dev"),
    ("designer", "Designer"),
    ("engineer", "Engineer"),
    ("analyst", "Analyst"),
    ("teacher", "Teacher"),
    ("expert", "Expert"),
    ("writer", "Writer"),
    ("doctor", "Doctor"),
    ("lawyer", "Lawyer"),
];

/// Output-format names. Short format nouns deliberately precede longer ones
/// ("markdown table" reads as a table, not as markdown).
const OUTPUT_CANON: &[(&str, &str)] = &[
    ("json", "JSON"),
    ("csv", "CSV"),
    ("table", "Table"),
    ("markdown", "Markdown"),
    ("html", "HTML"),
    ("xml", "XML"),
    ("yaml", "YAML"),
    ("python", "Python"),
    ("javascript", "JavaScript"),
    ("code", "Code"),
    ("list", "List"),
    ("bullet", "Bullets"),
    ("paragraph", "Paragraph"),
];

/// Two-letter words worth keeping when shortening terms.
const SHORT_ACRONYMS: &[&str] = &["ai", "ui", "ux", "db", "id", "io"];

static RE_LEAD_ARTICLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:a|an|the)\b\s+").unwrap());

/// Map a captured role phrase onto the controlled role vocabulary.
pub fn canonicalize_actor(text: &str) -> String {
    let role = text.to_lowercase();
    let role = role.trim();
    for (phrase, short) in ROLE_CANON {
        if role.contains(phrase) {
            return (*short).to_string();
        }
    }
    let fallback = title_case(&role.replace(' ', "_"));
    if fallback.is_empty() {
        text.replace(' ', "_")
    } else {
        fallback
    }
}

/// Map a captured output-format phrase onto the format vocabulary.
pub fn canonicalize_output_format(text: &str) -> String {
    let fmt = text.to_lowercase();
    let fmt = fmt.trim();
    for (name, canonical) in OUTPUT_CANON {
        if fmt.contains(name) {
            return (*canonical).to_string();
        }
    }
    let joined = fmt.split_whitespace().collect::<Vec<_>>().join("+");
    if joined.is_empty() {
        text.replace(' ', "_")
    } else {
        joined
    }
}

/// Shorten a free-text term into a compact identifier: drop articles, keep
/// words longer than two chars (or known short acronyms), underscore-join,
/// capitalize each segment.
pub fn shorten_term(text: &str) -> String {
    let term = RE_LEAD_ARTICLE.replace_all(text.trim(), "").into_owned();
    let kept: Vec<&str> = term
        .split_whitespace()
        .filter(|w| w.chars().count() > 2 || SHORT_ACRONYMS.contains(&w.to_lowercase().as_str()))
        .collect();
    let joined = kept.join("_");
    let result = joined
        .split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join("_");
    if result.is_empty() {
        term.replace(' ', "_")
    } else {
        result
    }
}

/// First char uppercased, the rest lowered.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Uppercase every alphabetic char that follows a non-alphabetic one,
/// lowercase the rest (`golden hour` -> `Golden hour`, `3d` -> `3D`).
pub(crate) fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut boundary = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if boundary {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            boundary = false;
        } else {
            out.push(c);
            boundary = true;
        }
    }
    out
}
