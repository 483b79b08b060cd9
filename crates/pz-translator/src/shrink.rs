//! Lexical compression: repeated-token folding, multi-word phrase tables,
//! scale/unit abbreviations, operator symbols, and filler removal.
//!
//! Stage order is fixed — each stage's output feeds the next, and later
//! stages must never undo an earlier substitution.

use pz_core::TranslatorConfig;
use regex::Regex;
use std::sync::LazyLock;

/// Runs of this many identical consecutive tokens fold to `tokenx<count>`.
const REPEAT_FOLD_THRESHOLD: usize = 5;

/// Multi-word phrases collapsed to a single token, most specific first.
const PHRASES: &[(&str, &str)] = &[
    (r"\bstep by step\b", "step_by_step"),
    (r"\bchain of thought\b", "chain_of_thought"),
    (r"\broot cause\b", "root_cause"),
    (r"\bunit test\b", "unit_test"),
    (r"\bint test\b", "int_test"),
    (r"\bdesign pattern\b", "design_pattern"),
    (r"\brest api\b", "REST_API"),
    (r"\basync await\b", "async_await"),
    (r"\bstateless api\b", "stateless_API"),
    (r"\berror handling\b", "error_handling"),
    (r"\buser experience\b", "UX"),
    (r"\buser interface\b", "UI"),
    (r"\bmachine learning\b", "ML"),
    (r"\bdeep learning\b", "DL"),
    (r"\bartificial intelligence\b", "AI"),
    (r"\bnatural language\b", "NL"),
    (r"\bdata structure\b", "data_struct"),
    (r"\bcloud infrastructure\b", "cloud_infra"),
    (r"\bmonitoring and logging\b", "monitoring+logging"),
];

/// Telegraphic abbreviations: numeric scale first, then units, then domain
/// nouns. Word-boundary anchored so they never rewrite inside a word.
const ABBREVIATIONS: &[(&str, &str)] = &[
    (r"\b(\d+),?000,?000\b", "${1}M"),
    (r"\b(\d+),?000\b", "${1}k"),
    (r"\bthousand\b", "k"),
    (r"\bmillion\b", "M"),
    (r"\bbillion\b", "B"),
    (r"\bseconds?\b", "s"),
    (r"\bminutes?\b", "m"),
    (r"\bhours?\b", "h"),
    (r"\bdays?\b", "d"),
    (r"\bweeks?\b", "w"),
    (r"\bmonths?\b", "mo"),
    (r"\byears?\b", "y"),
    (r"\bimage\b", "img"),
    (r"\bvideo\b", "vid"),
    (r"\bdocument\b", "doc"),
    (r"\bapplication\b", "app"),
    (r"\bdatabase\b", "db"),
    (r"\brepository\b", "repo"),
    (r"\bconfiguration\b", "config"),
    (r"\bauthentication\b", "auth"),
    (r"\badministrator\b", "admin"),
    (r"\benvironment\b", "env"),
    (r"\bpython\b", "Py"),
    (r"\btypescript\b", "TS"),
    (r"\bjavascript\b", "JS"),
    (r"\bkubernetes\b", "K8s"),
    (r"\bdocker\b", "DCK"),
    (r"\bapi\b", "API"),
    (r"\bjson\b", "JSON"),
    (r"\bxml\b", "XML"),
    (r"\bhtml\b", "HTML"),
    (r"\bcss\b", "CSS"),
    (r"\brest\b", "REST"),
    (r"\bhttp\b", "HTTP"),
    (r"\bsql\b", "SQL"),
    (r"\bnosql\b", "NoSQL"),
    (r"\bgraphql\b", "GQL"),
    (r"\bdevops\b", "DevOps"),
    (r"\bcicd\b", "CI/CD"),
    (r"\btesting\b", "Test"),
    (r"\boptimiz\w*\b", "Opt"),
    (r"\bperformance\b", "Perf"),
    (r"\befficiency\b", "Eff"),
    (r"\bsecurity\b", "Sec"),
    (r"\breliability\b", "Rel"),
    (r"\bscalability\b", "Scale"),
    (r"\bmaintainability\b", "Maint"),
    (r"\baccessibility\b", "A11y"),
];

/// Connective phrases replaced with operator symbols. Word-boundary anchored.
const SYMBOLS: &[(&str, &str)] = &[
    (r"\b(?:and then|followed by|after that|next step)\b", "|"),
    (r"\b(?:and also|as well as|along with|combined with)\b", "+"),
    (r"\b(?:leads to|results in|implies|therefore|thus|consequently)\b", "=>"),
    (r"\b(?:becomes|transforms to|converts to|changes to)\b", "->"),
    (r"\b(?:or alternatively|or else)\b", "//"),
];

/// Politeness, hedging, and transition words removed outright.
const FILLERS: &[&str] = &[
    r"\bplease\b",
    r"\bkindly\b",
    r"\bfor me\b",
    r"\bto me\b",
    r"\bthank you\b",
    r"\bi would like\b",
    r"\bif you could\b",
    r"\bif you can\b",
    r"\byou can\b",
    r"\bcan you\b",
    r"\bcould you\b",
    r"\byou should\b",
    r"\bshould be\b",
    r"\bmust be\b",
    r"\btry to\b",
    r"\battempt to\b",
    r"\bin order to\b",
    r"\bhow to\b",
    r"\bthe following\b",
    r"\bthe next\b",
    r"\bnext step\b",
    r"\bnext steps\b",
    r"\bafter that\b",
    r"\bthen do\b",
    r"\bafter completing\b",
    r"\bonce you\b",
    r"\bnow\b",
    r"\bhowever\b",
    r"\bmoreover\b",
    r"\bfurthermore\b",
    r"\badditionally\b",
    r"\bfinally\b",
    r"\bconsequently\b",
    r"\balso\b",
    r"\bas well\b",
    r"\btoo\b",
    r"\bvery\b",
    r"\breally\b",
    r"\bquite\b",
    r"\bsuch that\b",
    r"\bin such a way\b",
];

/// Articles and quantifiers stripped in aggressive mode only.
const ARTICLES: &[&str] = &[r"\ba\s+", r"\ban\s+", r"\bthe\s+", r"\bsome\s+", r"\bany\s+"];

fn compile_pairs(rules: &[(&'static str, &'static str)]) -> Vec<(Regex, &'static str)> {
    rules
        .iter()
        .map(|(pat, rep)| (Regex::new(&format!("(?i){pat}")).unwrap(), *rep))
        .collect()
}

fn compile_removals(rules: &[&str]) -> Vec<Regex> {
    rules
        .iter()
        .map(|pat| Regex::new(&format!("(?i){pat}")).unwrap())
        .collect()
}

static PHRASE_RULES: LazyLock<Vec<(Regex, &'static str)>> =
    LazyLock::new(|| compile_pairs(PHRASES));
static ABBREV_RULES: LazyLock<Vec<(Regex, &'static str)>> =
    LazyLock::new(|| compile_pairs(ABBREVIATIONS));
static SYMBOL_RULES: LazyLock<Vec<(Regex, &'static str)>> =
    LazyLock::new(|| compile_pairs(SYMBOLS));
static FILLER_RULES: LazyLock<Vec<Regex>> = LazyLock::new(|| compile_removals(FILLERS));
static ARTICLE_RULES: LazyLock<Vec<Regex>> = LazyLock::new(|| compile_removals(ARTICLES));

/// Collapse runs of 5+ identical whitespace-separated tokens to
/// `tokenx<count>`, guarding against pathological repetitive input.
pub fn fold_repeats(text: &str) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut out: Vec<String> = Vec::with_capacity(words.len());
    let mut i = 0;
    while i < words.len() {
        let mut run = 1;
        while i + run < words.len() && words[i + run] == words[i] {
            run += 1;
        }
        if run >= REPEAT_FOLD_THRESHOLD {
            out.push(format!("{}x{}", words[i], run));
        } else {
            for _ in 0..run {
                out.push(words[i].to_string());
            }
        }
        i += run;
    }
    out.join(" ")
}

/// Apply the full lexical compression sequence.
///
/// Inputs shorter than `min_phrase_len` words skip the table stages;
/// folding and whitespace renormalization always run.
pub fn compress_phrases(text: &str, config: &TranslatorConfig) -> String {
    let mut text = fold_repeats(text);

    if text.split_whitespace().count() >= config.min_phrase_len {
        for (re, rep) in PHRASE_RULES.iter() {
            text = re.replace_all(&text, *rep).into_owned();
        }
        if config.enable_symbols {
            for (re, rep) in ABBREV_RULES.iter() {
                text = re.replace_all(&text, *rep).into_owned();
            }
            for (re, rep) in SYMBOL_RULES.iter() {
                text = re.replace_all(&text, *rep).into_owned();
            }
        }
        for re in FILLER_RULES.iter() {
            text = re.replace_all(&text, "").into_owned();
        }
        if config.aggressive_mode {
            for re in ARTICLE_RULES.iter() {
                text = re.replace_all(&text, "").into_owned();
            }
        }
    }

    crate::normalize::squeeze(&text)
}
