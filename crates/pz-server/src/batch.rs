//! Batch translation: one pipeline call per item, in order, with
//! aggregated token accounting. No state is shared across items.

use pz_core::Translation;
use pz_translator::Translator;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    pub results: Vec<Translation>,
    pub total_original_tokens: usize,
    pub total_final_tokens: usize,
    pub mean_compression_ratio: f64,
}

pub fn batch_translate(translator: &Translator, prompts: &[String]) -> BatchSummary {
    let results: Vec<Translation> = prompts
        .iter()
        .map(|prompt| translator.translate_to_compact(prompt))
        .collect();
    let total_original_tokens = results.iter().map(|t| t.stats.original_tokens).sum();
    let total_final_tokens = results.iter().map(|t| t.stats.final_tokens).sum();
    let mean = if results.is_empty() {
        0.0
    } else {
        results.iter().map(|t| t.stats.compression_ratio).sum::<f64>() / results.len() as f64
    };
    BatchSummary {
        results,
        total_original_tokens,
        total_final_tokens,
        mean_compression_ratio: (mean * 10.0).round() / 10.0,
    }
}
