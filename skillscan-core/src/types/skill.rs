//! Skill entities — aggregated, scored competencies.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::evidence::EvidenceItem;

/// Skill taxonomy category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Oop,
    DataStructures,
    Algorithms,
    Patterns,
    Practices,
}

impl SkillCategory {
    /// Parse a category key as it appears in taxonomy files.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "oop" => Some(Self::Oop),
            "data_structures" => Some(Self::DataStructures),
            "algorithms" => Some(Self::Algorithms),
            "patterns" => Some(Self::Patterns),
            "practices" => Some(Self::Practices),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Oop => "oop",
            Self::DataStructures => "data_structures",
            Self::Algorithms => "algorithms",
            Self::Patterns => "patterns",
            Self::Practices => "practices",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An aggregated, scored competency derived from one or more evidence items.
///
/// `category` and `description` come from the taxonomy entry for `name`;
/// `proficiency_score` is a pure function of the evidence count. A skill with
/// empty evidence is never materialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: SkillCategory,
    /// Static taxonomy-provided description, independent of evidence.
    pub description: String,
    /// Evidence in scan order, not deduplicated.
    pub evidence: Vec<EvidenceItem>,
    /// Bounded `[0.0, 1.0]` volume-based score.
    pub proficiency_score: f32,
}

impl Skill {
    pub fn evidence_count(&self) -> usize {
        self.evidence.len()
    }
}
