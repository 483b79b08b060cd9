//! Word/token accounting and compression-ratio computation.

use pz_core::{CompressionReport, TranslationStats};

/// Rough token estimate: one token per four characters, floored.
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / 4
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

fn reduction_pct(before: usize, after: usize) -> f64 {
    round1((1.0 - after as f64 / before.max(1) as f64) * 100.0)
}

/// Size accounting for one translation. Empty originals report all-zero
/// counts and a fixed 100.0 ratio so the division never degenerates.
pub fn measure(original: &str, notation: &str) -> TranslationStats {
    if original.trim().is_empty() {
        return TranslationStats {
            original_words: 0,
            original_tokens: 0,
            final_words: 0,
            final_tokens: 0,
            compression_ratio: 100.0,
        };
    }
    let original_tokens = estimate_tokens(original);
    let final_tokens = estimate_tokens(notation);
    TranslationStats {
        original_words: word_count(original),
        original_tokens,
        final_words: word_count(notation),
        final_tokens,
        compression_ratio: reduction_pct(original_tokens, final_tokens),
    }
}

/// Post-hoc reduction report over an arbitrary (original, compressed) pair,
/// independent of any live translation call.
pub fn build_compression_report(original: &str, compressed: &str) -> CompressionReport {
    let original_words = word_count(original);
    let compressed_words = word_count(compressed);
    let original_tokens = estimate_tokens(original);
    let compressed_tokens = estimate_tokens(compressed);
    CompressionReport {
        original_words,
        compressed_words,
        word_reduction_pct: reduction_pct(original_words, compressed_words),
        original_tokens,
        compressed_tokens,
        token_reduction_pct: reduction_pct(original_tokens, compressed_tokens),
    }
}
