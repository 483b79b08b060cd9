//! Ordered field extraction over a shrinking residual string.
//!
//! Each field type tries its candidate patterns against the current residual
//! in priority order; the first usable capture wins, its span is replaced by
//! a single space, and later field types see the updated residual. A failed
//! attempt is never an error — extraction just moves on.

use crate::canon;
use pz_core::{FieldTag, FieldToken, TranslatorConfig};
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

struct Capture {
    span: Range<usize>,
    value: String,
}

static ACT_PATTERNS: LazyLock<Vec<(Regex, usize)>> = LazyLock::new(|| {
    vec![
        (
            Regex::new(r"(?i)(?:act as|role|persona|assume|be a?)\s+([a-z\s]{2,30}?)(?:[.,;]|and|then|who|that)")
                .unwrap(),
            1,
        ),
        (
            Regex::new(r"(?i)\b(senior|expert|professional|experienced)\s+([a-z]+)(?:\s+(developer|engineer|architect|analyst))?")
                .unwrap(),
            2,
        ),
    ]
});

static OBJ_EXPLICIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:your\s+)?(?:objective|goal)\s+(?:is\s+)?(?:to\s+)?([a-z0-9_\s]{2,50}?)(?:\.|,|;|and|$)")
        .unwrap()
});

/// Direct action verbs. Matches preceded by `to ` are skipped in code — they
/// belong to the explicit objective pattern above.
static OBJ_ACTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:write|create|generate|produce|develop|design)\s+([a-z0-9_\s]{2,50}?)(?:\.|,|;|and)")
        .unwrap()
});

static LIM_PATTERNS: LazyLock<Vec<(Regex, usize)>> = LazyLock::new(|| {
    vec![
        (
            Regex::new(r"(?i)(?:limit|restrict|maximum|under|no|without|only)\s+(?:the\s+)?(?:output\s+)?(?:to\s+)?([a-z0-9\s]{2,40}?)(?:[.,;]|and)")
                .unwrap(),
            1,
        ),
        (
            Regex::new(r"(?i)(?:under|less than|maximum of)\s+([0-9a-z\s]{2,40}?)[.,;]").unwrap(),
            1,
        ),
    ]
});

static OUT_PATTERNS: LazyLock<Vec<(Regex, usize)>> = LazyLock::new(|| {
    vec![
        (
            Regex::new(r"(?i)(?:output|format|return|provide|should be)\s+(?:as\s+)?(?:a\s+)?([a-z\s]{2,40}?)(?:[.,;]|$)")
                .unwrap(),
            1,
        ),
        (
            Regex::new(r"(?i)formatted\s+as\s+(?:a\s+)?([a-z\s]{2,40}?)(?:[.,;]|$)").unwrap(),
            1,
        ),
    ]
});

/// Exact-phrase technique triggers. Every distinct keyword that matches
/// contributes its own token; the compressed spellings are listed alongside
/// the raw ones because phrase compression runs before extraction.
const TECHNIQUE_ROWS: &[(&str, FieldTag, &str)] = &[
    ("step by step", FieldTag::Reasoning, "StepByStep"),
    ("step_by_step", FieldTag::Reasoning, "StepByStep"),
    ("chain of thought", FieldTag::Reasoning, "ChainOfThought"),
    ("chain_of_thought", FieldTag::Reasoning, "ChainOfThought"),
    ("output as json", FieldTag::OutputFormat, "JSON"),
    ("return json", FieldTag::OutputFormat, "JSON"),
    ("as a table", FieldTag::OutputFormat, "Table"),
    ("in markdown", FieldTag::OutputFormat, "Markdown"),
    ("write code", FieldTag::Generate, "Code"),
    ("generate script", FieldTag::Generate, "Script"),
    ("bullet points", FieldTag::OutputFormat, "Bullets"),
    ("as a list", FieldTag::OutputFormat, "List"),
    ("provide list", FieldTag::OutputFormat, "List"),
];

static TECHNIQUES: LazyLock<Vec<(Regex, FieldTag, &'static str)>> = LazyLock::new(|| {
    TECHNIQUE_ROWS
        .iter()
        .map(|(kw, tag, value)| {
            (
                Regex::new(&format!(r"(?i)\b{}\b", regex::escape(kw))).unwrap(),
                *tag,
                *value,
            )
        })
        .collect()
});

struct ExtendedField {
    tag: FieldTag,
    keywords: &'static [&'static str],
}

/// Extended visual-domain detection lists; declaration order decides which
/// keyword wins within a field type.
const EXTENDED_FIELDS: &[ExtendedField] = &[
    ExtendedField {
        tag: FieldTag::Style,
        keywords: &["realistic", "anime", "oil painting", "sketch", "3d", "cartoon", "photorealistic"],
    },
    ExtendedField {
        tag: FieldTag::Mood,
        keywords: &["happy", "dark", "cheerful", "friendly", "dramatic", "mysterious", "serene"],
    },
    ExtendedField {
        tag: FieldTag::Lighting,
        keywords: &["sunny", "noon", "golden hour", "backlit", "dramatic lighting", "soft light"],
    },
    ExtendedField {
        tag: FieldTag::Quality,
        keywords: &["high quality", "best quality", "4k", "8k", "detailed", "ultra detailed"],
    },
    ExtendedField {
        tag: FieldTag::Ratio,
        keywords: &["16:9", "9:16", "1:1", "4:3", "3:2", "aspect ratio"],
    },
];

/// Aspect-ratio strings emitted verbatim rather than title-cased.
const RATIO_LITERALS: &[&str] = &["16:9", "9:16", "1:1", "4:3", "3:2"];

/// Try one candidate pattern. `None` means no match, a missing capture
/// group, or a capture too short to be usable — never an error.
fn attempt(re: &Regex, group: usize, text: &str) -> Option<Capture> {
    let caps = re.captures(text)?;
    let whole = caps.get(0)?;
    let value = caps.get(group)?.as_str().trim().to_string();
    if value.chars().count() < 2 {
        return None;
    }
    Some(Capture { span: whole.range(), value })
}

/// Like `attempt`, but skips action verbs preceded by `to ` — those are the
/// tail of an explicit "objective is to ..." clause.
fn attempt_action(re: &Regex, text: &str) -> Option<Capture> {
    for caps in re.captures_iter(text) {
        let whole = caps.get(0)?;
        if text[..whole.start()].ends_with("to ") {
            continue;
        }
        let value = match caps.get(1) {
            Some(g) => g.as_str().trim().to_string(),
            None => continue,
        };
        if value.chars().count() < 2 {
            continue;
        }
        return Some(Capture { span: whole.range(), value });
    }
    None
}

/// Replace a matched span with a single space.
fn cut(text: &str, span: &Range<usize>) -> String {
    format!("{} {}", &text[..span.start], &text[span.end..])
}

/// Clip a value to a maximum char length.
fn clip(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

/// Run the ordered field extraction. Returns the emitted tokens and the
/// whitespace-squeezed residual text.
pub fn extract(text: &str, config: &TranslatorConfig) -> (Vec<FieldToken>, String) {
    let mut tokens: Vec<FieldToken> = Vec::new();
    let mut residual = text.to_string();

    // Actor: first usable capture wins.
    for (re, group) in ACT_PATTERNS.iter() {
        if let Some(cap) = attempt(re, *group, &residual) {
            let role = clip(&cap.value, 40);
            tokens.push(FieldToken::new(FieldTag::Actor, canon::canonicalize_actor(&role)));
            residual = cut(&residual, &cap.span);
            break;
        }
    }

    // Objective: explicit "objective/goal is to ..." first, then bare action
    // verbs. The shortened value must still be at least two chars.
    let obj_captures = [
        attempt(&OBJ_EXPLICIT, 1, &residual),
        attempt_action(&OBJ_ACTION, &residual),
    ];
    for cap in obj_captures.into_iter().flatten() {
        let objective = canon::shorten_term(&clip(&cap.value, 50));
        if objective.chars().count() < 2 {
            continue;
        }
        tokens.push(FieldToken::new(FieldTag::Objective, objective));
        residual = cut(&residual, &cap.span);
        break;
    }

    // Limit: raw capture, no canonicalizer.
    for (re, group) in LIM_PATTERNS.iter() {
        if let Some(cap) = attempt(re, *group, &residual) {
            tokens.push(FieldToken::new(FieldTag::Limit, clip(&cap.value, 40)));
            residual = cut(&residual, &cap.span);
            break;
        }
    }

    // Output format.
    for (re, group) in OUT_PATTERNS.iter() {
        if let Some(cap) = attempt(re, *group, &residual) {
            let format = canon::canonicalize_output_format(&clip(&cap.value, 40));
            tokens.push(FieldToken::new(FieldTag::OutputFormat, format));
            residual = cut(&residual, &cap.span);
            break;
        }
    }

    // Technique keywords: every distinct keyword contributes a token and
    // consumes its first occurrence.
    for (re, tag, value) in TECHNIQUES.iter() {
        if re.is_match(&residual) {
            tokens.push(FieldToken::new(*tag, *value));
            residual = re.replace(&residual, "").into_owned();
        }
    }

    // Extended visual/technical fields: containment detection only, at most
    // one token per field type, nothing consumed from the residual.
    if config.enable_extended_ops {
        detect_extended(&mut tokens, &residual);
    }

    (tokens, crate::normalize::squeeze(&residual))
}

fn detect_extended(tokens: &mut Vec<FieldToken>, text: &str) {
    let lower = text.to_lowercase();
    for field in EXTENDED_FIELDS {
        for keyword in field.keywords {
            if lower.contains(keyword) {
                if RATIO_LITERALS.contains(keyword) {
                    tokens.push(FieldToken::new(field.tag, *keyword));
                } else if *keyword == "4k" || *keyword == "8k" {
                    tokens.push(FieldToken::new(FieldTag::Quality, keyword.to_uppercase()));
                } else {
                    tokens.push(FieldToken::new(field.tag, canon::title_case(&keyword.replace(' ', "_"))));
                }
                break;
            }
        }
    }
}
