//! Translator configuration.

use serde::{Deserialize, Serialize};

/// Toggles read once per translator instance. Treated as read-only after
/// construction so one translator can be shared across callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// Also strip standalone articles and quantifiers.
    pub aggressive_mode: bool,
    /// Shield fenced code blocks from compression and case folding.
    pub preserve_examples: bool,
    /// Append a `// TAG=meaning` legend for the tags in the notation.
    pub include_annotations: bool,
    /// Inputs with fewer words than this skip phrase conversion entirely.
    pub min_phrase_len: usize,
    /// Enable the abbreviation and operator-symbol tables.
    pub enable_symbols: bool,
    /// Enable extended visual/technical field detection.
    pub enable_extended_ops: bool,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            aggressive_mode: false,
            preserve_examples: true,
            include_annotations: false,
            min_phrase_len: 3,
            enable_symbols: true,
            enable_extended_ops: true,
        }
    }
}
