//! Progression entries — timeline periods annotated with resolved skill evidence.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A timeline period annotated with the skills whose evidence resolved to it.
///
/// Emitted only for periods with at least one resolvable evidence item, in
/// the same ascending order as the source timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressionEntry {
    /// Mirrors the source period's `month`.
    pub period_label: String,
    /// Distinct skills with evidence in this period.
    pub skill_count: u32,
    /// Skill names ranked by evidence count within the period, ties broken
    /// by name ascending.
    pub top_skills: Vec<String>,
    /// Evidence items whose file resolved to this period.
    pub evidence_count: u32,
    pub commits: u32,
    pub contributors: u32,
    pub commit_messages: Vec<String>,
    pub top_files: Vec<String>,
    pub period_languages: BTreeMap<String, u32>,
}
