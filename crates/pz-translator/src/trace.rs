//! Step-by-step trace wrapper around the pipeline.
//!
//! Runs the same stage functions in the same order as
//! `Translator::translate_to_compact`, recording a before/after snapshot per
//! stage, so the final notation is identical by construction. The only side
//! effect in the workspace lives here: persisting a transcript to a
//! timestamped log file, which is a single scoped write that can never
//! affect the in-memory result.

use crate::pipeline::{self, Translator};
use crate::{extract, metrics, normalize, shrink};
use chrono::Local;
use pz_core::{Result, TranslationStats};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One before/after snapshot of a pipeline stage.
#[derive(Debug, Clone)]
pub struct StageTrace {
    pub stage: &'static str,
    pub before: String,
    pub after: String,
}

/// Compression quality grade used in trace summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Efficiency {
    Excellent,
    Good,
    Fair,
    Low,
}

impl Efficiency {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 70.0 {
            Self::Excellent
        } else if ratio >= 50.0 {
            Self::Good
        } else if ratio >= 30.0 {
            Self::Fair
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Low => "low",
        }
    }
}

/// Full stage-by-stage account of one translation.
#[derive(Debug, Clone)]
pub struct TraceReport {
    pub steps: Vec<StageTrace>,
    pub notation: String,
    pub stats: TranslationStats,
    pub grade: Efficiency,
}

/// Debug wrapper: same pipeline, with per-stage introspection.
pub struct Tracer {
    translator: Translator,
}

impl Tracer {
    pub fn new(translator: Translator) -> Self {
        Self { translator }
    }

    /// Translate while recording every stage. Pure and in-memory; writing
    /// the transcript is a separate call.
    pub fn trace(&self, prompt: &str) -> TraceReport {
        let mut steps = Vec::new();

        if prompt.trim().is_empty() {
            let stats = metrics::measure("", "");
            let grade = Efficiency::from_ratio(stats.compression_ratio);
            return TraceReport { steps, notation: String::new(), stats, grade };
        }

        let config = self.translator.config();
        let (masked, blocks) = if config.preserve_examples {
            pipeline::mask_examples(prompt)
        } else {
            (prompt.to_string(), Vec::new())
        };

        let normalized = normalize::normalize(&masked);
        debug!(stage = "normalize", "collapsed whitespace and case-folded");
        steps.push(StageTrace { stage: "normalize", before: masked, after: normalized.clone() });

        let shrunk = shrink::compress_phrases(&normalized, config);
        debug!(stage = "shrink", "applied phrase, abbreviation, and symbol tables");
        steps.push(StageTrace { stage: "shrink", before: normalized, after: shrunk.clone() });

        let (tokens, residual) = extract::extract(&shrunk, config);
        let rendered = tokens.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(" ");
        debug!(stage = "extract", fields = tokens.len(), "extracted field tokens");
        steps.push(StageTrace {
            stage: "extract",
            before: shrunk,
            after: format!("{rendered} ~ {residual}"),
        });

        let notation = pipeline::compose(&tokens, &residual, &blocks, config);
        debug!(stage = "assemble", "composed final notation");
        steps.push(StageTrace { stage: "assemble", before: residual, after: notation.clone() });

        let stats = metrics::measure(prompt, &notation);
        let grade = Efficiency::from_ratio(stats.compression_ratio);
        debug!(stage = "measure", ratio = stats.compression_ratio, "computed compression stats");

        TraceReport { steps, notation, stats, grade }
    }

    /// Render a line-oriented transcript of a trace.
    pub fn transcript(report: &TraceReport) -> String {
        let mut lines = Vec::with_capacity(report.steps.len() * 3 + 3);
        lines.push("== prompt trace ==".to_string());
        for step in &report.steps {
            lines.push(format!("[{}]", step.stage));
            lines.push(format!("  before: {}", step.before));
            lines.push(format!("  after:  {}", step.after));
        }
        lines.push(format!("notation: {}", report.notation));
        lines.push(format!(
            "tokens: {} -> {} ({}%, {})",
            report.stats.original_tokens,
            report.stats.final_tokens,
            report.stats.compression_ratio,
            report.grade.as_str()
        ));
        lines.join("\n")
    }

    /// Persist a transcript to `<dir>/pz_trace_<timestamp>.log`. Open once,
    /// write once, guaranteed close; the trace itself is already complete
    /// when this runs.
    pub fn write_transcript(&self, report: &TraceReport, dir: &Path) -> Result<PathBuf> {
        let name = format!("pz_trace_{}.log", Local::now().format("%Y%m%d_%H%M%S"));
        let path = dir.join(name);
        fs::write(&path, Self::transcript(report))?;
        Ok(path)
    }
}
