//! PromptZip translation engine — verbose instruction text in, compact
//! tagged notation out.
//!
//! Pipeline stages:
//! 1. Normalize — whitespace collapse and case folding
//! 2. Shrink — phrase, abbreviation, and operator-symbol tables
//! 3. Extract — ordered field patterns over a shrinking residual
//! 4. Assemble — tagged tokens plus residue, or the UNCLASSIFIED sentinel
//! 5. Measure — token estimates and compression ratio
//!
//! A separate one-directional expander maps notation back to readable
//! phrasing. All rule tables are process-wide immutable statics; every
//! public operation is a pure function of its inputs and the translator's
//! read-only configuration.

pub mod canon;
pub mod expand;
pub mod extract;
pub mod metrics;
pub mod normalize;
pub mod pipeline;
pub mod shrink;
pub mod trace;

pub use metrics::build_compression_report;
pub use pipeline::{assemble, Translator};
pub use pz_core::{
    CompressionReport, FieldTag, FieldToken, Translation, TranslationStats, TranslatorConfig,
};
pub use trace::{Efficiency, StageTrace, TraceReport, Tracer};
