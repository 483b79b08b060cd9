//! The translation pipeline: normalize → shrink → extract → assemble →
//! measure, plus the one-directional expansion path.

use crate::{expand, extract, metrics, normalize, shrink};
use pz_core::{CompressionReport, FieldToken, Translation, TranslatorConfig};

/// Sentinel emitted when neither field tokens nor residue survive.
pub const UNCLASSIFIED: &str = "UNCLASSIFIED";

const MASK_OPEN: char = '\u{E000}';
const MASK_CLOSE: char = '\u{E001}';

/// Stateless prompt translator. Configuration is read-only after
/// construction, so one instance can serve any number of callers.
pub struct Translator {
    config: TranslatorConfig,
}

impl Translator {
    pub fn new(config: TranslatorConfig) -> Self {
        Self { config }
    }

    /// Convenience constructor with article stripping enabled.
    pub fn aggressive() -> Self {
        Self::new(TranslatorConfig { aggressive_mode: true, ..Default::default() })
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Compact a verbose prompt into tagged notation with size accounting.
    /// Total over all string inputs; empty input yields empty notation and
    /// a fixed 100.0 ratio.
    pub fn translate_to_compact(&self, text: &str) -> Translation {
        if text.trim().is_empty() {
            return Translation { notation: String::new(), stats: metrics::measure("", "") };
        }

        let (masked, blocks) = if self.config.preserve_examples {
            mask_examples(text)
        } else {
            (text.to_string(), Vec::new())
        };

        let normalized = normalize::normalize(&masked);
        let shrunk = shrink::compress_phrases(&normalized, &self.config);
        let (tokens, residual) = extract::extract(&shrunk, &self.config);
        let notation = compose(&tokens, &residual, &blocks, &self.config);
        let stats = metrics::measure(text, &notation);
        Translation { notation, stats }
    }

    /// Expand compact notation back to readable phrasing.
    pub fn translate_to_expanded(&self, notation: &str) -> String {
        expand::expand(notation)
    }

    /// Post-hoc reduction report over an arbitrary text pair.
    pub fn compression_report(&self, original: &str, compressed: &str) -> CompressionReport {
        metrics::build_compression_report(original, compressed)
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(TranslatorConfig::default())
    }
}

/// Join field tokens and residue into the final notation.
pub fn assemble(tokens: &[FieldToken], residual: &str) -> String {
    let rendered: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
    match (rendered.is_empty(), residual.is_empty()) {
        (false, false) => format!("{} {}", rendered.join(" "), residual),
        (false, true) => rendered.join(" "),
        (true, false) => residual.to_string(),
        (true, true) => UNCLASSIFIED.to_string(),
    }
}

/// Assemble, restore shielded example blocks, and append the annotation
/// legend when configured. Shared verbatim by the trace wrapper.
pub(crate) fn compose(
    tokens: &[FieldToken],
    residual: &str,
    blocks: &[String],
    config: &TranslatorConfig,
) -> String {
    let mut notation = assemble(tokens, residual);
    if !blocks.is_empty() {
        notation = restore_examples(&notation, blocks);
    }
    if config.include_annotations {
        notation = annotate(&notation, tokens);
    }
    notation
}

/// Replace fenced code blocks with private-use sentinels so no downstream
/// stage can rewrite or case-fold them. Unterminated fences are left alone.
pub(crate) fn mask_examples(text: &str) -> (String, Vec<String>) {
    let mut blocks = Vec::new();
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("```") {
        match rest[start + 3..].find("```") {
            Some(rel) => {
                let end = start + 3 + rel + 3;
                out.push_str(&rest[..start]);
                out.push(MASK_OPEN);
                out.push_str(&blocks.len().to_string());
                out.push(MASK_CLOSE);
                blocks.push(rest[start..end].to_string());
                rest = &rest[end..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    (out, blocks)
}

fn restore_examples(text: &str, blocks: &[String]) -> String {
    let mut out = text.to_string();
    for (i, block) in blocks.iter().enumerate() {
        let marker = format!("{MASK_OPEN}{i}{MASK_CLOSE}");
        out = out.replace(&marker, block);
    }
    out
}

/// Trailing `// TAG=meaning` legend for the tags present, first occurrence
/// of each tag only.
fn annotate(notation: &str, tokens: &[FieldToken]) -> String {
    if tokens.is_empty() {
        return notation.to_string();
    }
    let mut legend: Vec<String> = Vec::new();
    let mut seen: Vec<pz_core::FieldTag> = Vec::new();
    for token in tokens {
        if !seen.contains(&token.tag) {
            seen.push(token.tag);
            legend.push(format!("{}={}", token.tag.as_str(), token.tag.label()));
        }
    }
    format!("{} // {}", notation, legend.join(" "))
}
