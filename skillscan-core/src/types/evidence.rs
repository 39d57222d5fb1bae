//! Evidence items — located signals that a skill is demonstrated.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Origin of an evidence signal.
///
/// A single tagged discriminator rather than a type per origin: the
/// aggregator treats all three identically for scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceKind {
    /// A taxonomy rule matched a line of source text.
    CodePattern,
    /// Derived from a project-wide quality metric summary.
    Metric,
    /// Derived from commit-history signals.
    Practice,
}

impl EvidenceKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::CodePattern => "code_pattern",
            Self::Metric => "metric",
            Self::Practice => "practice",
        }
    }
}

impl fmt::Display for EvidenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single located signal that a skill is demonstrated.
///
/// Created once during a scan pass and never mutated. Repeated matches are
/// kept as separate items — volume is the scoring signal, so there is no
/// deduplication anywhere in the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceItem {
    /// Canonical skill identifier; must exist in the taxonomy.
    pub skill_name: String,
    /// Origin of the signal.
    pub kind: EvidenceKind,
    /// Human-readable explanation of what matched.
    pub description: String,
    /// Relative path where the match occurred. Empty for project-wide
    /// metric/practice signals, which have no single home file.
    pub file_path: String,
    /// 1-based line of the first match occurrence on that line; `None` for
    /// signals that are not line-anchored.
    pub line: Option<u32>,
    /// Per-match reliability in `[0.0, 1.0]`, fixed per rule. Retained for
    /// display and filtering; never blended into the proficiency score.
    pub confidence: f32,
}

impl EvidenceItem {
    /// Construct a line-anchored code-pattern item.
    pub fn code_pattern(
        skill_name: impl Into<String>,
        description: impl Into<String>,
        file_path: impl Into<String>,
        line: u32,
        confidence: f32,
    ) -> Self {
        Self {
            skill_name: skill_name.into(),
            kind: EvidenceKind::CodePattern,
            description: description.into(),
            file_path: file_path.into(),
            line: Some(line),
            confidence,
        }
    }

    /// Construct a project-wide signal with no file anchor.
    pub fn project_wide(
        skill_name: impl Into<String>,
        kind: EvidenceKind,
        description: impl Into<String>,
        confidence: f32,
    ) -> Self {
        Self {
            skill_name: skill_name.into(),
            kind,
            description: description.into(),
            file_path: String::new(),
            line: None,
            confidence,
        }
    }
}
