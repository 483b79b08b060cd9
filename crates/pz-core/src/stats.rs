//! Translation records and compression accounting.

use serde::{Deserialize, Serialize};

/// Size accounting for a single translation. Computed once per call and
/// never mutated afterward. Token counts are the rough chars/4 estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationStats {
    pub original_words: usize,
    pub original_tokens: usize,
    pub final_words: usize,
    pub final_tokens: usize,
    /// Percentage token reduction, one decimal. Negative when the notation
    /// grew; fixed at 100.0 for empty input.
    pub compression_ratio: f64,
}

/// Post-hoc word/token reduction report over an arbitrary text pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressionReport {
    pub original_words: usize,
    pub compressed_words: usize,
    pub word_reduction_pct: f64,
    pub original_tokens: usize,
    pub compressed_tokens: usize,
    pub token_reduction_pct: f64,
}

/// Result of one compaction call: the notation plus its accounting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Translation {
    pub notation: String,
    pub stats: TranslationStats,
}
