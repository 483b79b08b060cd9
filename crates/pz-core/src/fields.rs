//! The closed field-tag vocabulary of the compact notation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic slot in the compact notation. Core tags are produced by the
/// capture patterns and technique keywords; extended tags by the
/// visual/technical keyword detectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldTag {
    Actor,
    Objective,
    Limit,
    Context,
    OutputFormat,
    Summary,
    Generate,
    Evaluate,
    Reasoning,
    Visual,
    Style,
    Mood,
    Lighting,
    Colors,
    Quality,
    Ratio,
    Pose,
    Background,
    Subject,
    Language,
    Framework,
    Pattern,
    Performance,
    Test,
    Tone,
    Audience,
    Length,
}

impl FieldTag {
    pub const ALL: &'static [FieldTag] = &[
        FieldTag::Actor,
        FieldTag::Objective,
        FieldTag::Limit,
        FieldTag::Context,
        FieldTag::OutputFormat,
        FieldTag::Summary,
        FieldTag::Generate,
        FieldTag::Evaluate,
        FieldTag::Reasoning,
        FieldTag::Visual,
        FieldTag::Style,
        FieldTag::Mood,
        FieldTag::Lighting,
        FieldTag::Colors,
        FieldTag::Quality,
        FieldTag::Ratio,
        FieldTag::Pose,
        FieldTag::Background,
        FieldTag::Subject,
        FieldTag::Language,
        FieldTag::Framework,
        FieldTag::Pattern,
        FieldTag::Performance,
        FieldTag::Test,
        FieldTag::Tone,
        FieldTag::Audience,
        FieldTag::Length,
    ];

    /// Stable wire spelling of the tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Actor => "ACT",
            Self::Objective => "OBJ",
            Self::Limit => "LIM",
            Self::Context => "CTX",
            Self::OutputFormat => "OUT",
            Self::Summary => "SUM",
            Self::Generate => "GEN",
            Self::Evaluate => "EVAL",
            Self::Reasoning => "THINK",
            Self::Visual => "VIS",
            Self::Style => "STYLE",
            Self::Mood => "MOOD",
            Self::Lighting => "LIGHTING",
            Self::Colors => "COLORS",
            Self::Quality => "QUALITY",
            Self::Ratio => "RATIO",
            Self::Pose => "POSE",
            Self::Background => "BG",
            Self::Subject => "SUBJECT",
            Self::Language => "LANG",
            Self::Framework => "FRAMEWORK",
            Self::Pattern => "PATTERN",
            Self::Performance => "PERF",
            Self::Test => "TEST",
            Self::Tone => "TONE",
            Self::Audience => "AUDIENCE",
            Self::Length => "LEN",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|tag| tag.as_str() == s)
    }

    /// One-word legend label used for inline annotations.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Actor => "role",
            Self::Objective => "objective",
            Self::Limit => "limit",
            Self::Context => "context",
            Self::OutputFormat => "output",
            Self::Summary => "summary",
            Self::Generate => "generate",
            Self::Evaluate => "evaluate",
            Self::Reasoning => "reasoning",
            Self::Visual => "visual",
            Self::Style => "style",
            Self::Mood => "mood",
            Self::Lighting => "lighting",
            Self::Colors => "colors",
            Self::Quality => "quality",
            Self::Ratio => "ratio",
            Self::Pose => "pose",
            Self::Background => "background",
            Self::Subject => "subject",
            Self::Language => "language",
            Self::Framework => "framework",
            Self::Pattern => "pattern",
            Self::Performance => "performance",
            Self::Test => "test",
            Self::Tone => "tone",
            Self::Audience => "audience",
            Self::Length => "length",
        }
    }

    /// Human-readable meaning, used by the dispatcher's vocabulary listing.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Actor => "role or persona to assume",
            Self::Objective => "task or goal to accomplish",
            Self::Limit => "constraint on the output",
            Self::Context => "background assumptions",
            Self::OutputFormat => "shape of the response",
            Self::Summary => "summarization request",
            Self::Generate => "artifact to produce",
            Self::Evaluate => "review or critique request",
            Self::Reasoning => "reasoning style to apply",
            Self::Visual => "diagram or illustration request",
            Self::Style => "visual or artistic style",
            Self::Mood => "mood or atmosphere",
            Self::Lighting => "lighting condition",
            Self::Colors => "color palette",
            Self::Quality => "detail or resolution level",
            Self::Ratio => "aspect ratio",
            Self::Pose => "subject pose or stance",
            Self::Background => "scene backdrop",
            Self::Subject => "main subject of the scene",
            Self::Language => "programming language",
            Self::Framework => "framework or library",
            Self::Pattern => "design pattern or architecture",
            Self::Performance => "performance target",
            Self::Test => "testing requirement",
            Self::Tone => "writing tone or voice",
            Self::Audience => "target audience",
            Self::Length => "length target",
        }
    }

    pub fn is_extended(&self) -> bool {
        !matches!(
            self,
            Self::Actor
                | Self::Objective
                | Self::Limit
                | Self::Context
                | Self::OutputFormat
                | Self::Summary
                | Self::Generate
                | Self::Evaluate
                | Self::Reasoning
                | Self::Visual
        )
    }
}

impl fmt::Display for FieldTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One extracted `TAG:Value` token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldToken {
    pub tag: FieldTag,
    pub value: String,
}

impl FieldToken {
    pub fn new(tag: FieldTag, value: impl Into<String>) -> Self {
        Self { tag, value: value.into() }
    }
}

impl fmt::Display for FieldToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.tag.as_str(), self.value)
    }
}
