//! Export shapes — the stable contract consumed by the API/UI boundary.
//!
//! Field names here are load-bearing; downstream consumers parse them as-is.
//! Ranking is applied at this layer only: the aggregator's map is unordered
//! by design.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use skillscan_core::types::collections::FxHashMap;
use skillscan_core::types::{EvidenceItem, ProgressionEntry, Skill};

/// One evidence item as exported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub file: String,
    pub line: Option<u32>,
    pub confidence: f32,
}

impl From<&EvidenceItem> for EvidenceEntry {
    fn from(item: &EvidenceItem) -> Self {
        Self {
            kind: item.kind.name().to_string(),
            description: item.description.clone(),
            file: item.file_path.clone(),
            line: item.line,
            confidence: item.confidence,
        }
    }
}

/// One skill as exported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    pub category: String,
    pub description: String,
    pub proficiency_score: f32,
    pub evidence_count: usize,
    pub evidence: Vec<EvidenceEntry>,
}

/// A ranked summary row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopSkill {
    pub name: String,
    pub score: f32,
}

/// Inventory-level summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub total_skills: usize,
    pub by_category: BTreeMap<String, usize>,
    pub top_skills: Vec<TopSkill>,
}

/// The full export: flat inventory, summary, and progression.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillReport {
    pub skills: Vec<SkillEntry>,
    pub summary: Summary,
    pub progression: Vec<ProgressionEntry>,
}

/// Presentation ordering: proficiency desc, then evidence count desc, then
/// name asc for determinism.
fn rank(a: &Skill, b: &Skill) -> std::cmp::Ordering {
    b.proficiency_score
        .partial_cmp(&a.proficiency_score)
        .unwrap_or(std::cmp::Ordering::Equal)
        .then_with(|| b.evidence.len().cmp(&a.evidence.len()))
        .then_with(|| a.name.cmp(&b.name))
}

/// Flatten skills and progression into the export shape.
pub fn build_report(
    skills: &FxHashMap<String, Skill>,
    progression: Vec<ProgressionEntry>,
    top_skills_limit: usize,
) -> SkillReport {
    let mut ordered: Vec<&Skill> = skills.values().collect();
    ordered.sort_by(|a, b| rank(a, b));

    let mut by_category: BTreeMap<String, usize> = BTreeMap::new();
    for skill in &ordered {
        *by_category.entry(skill.category.name().to_string()).or_insert(0) += 1;
    }

    let top_skills = ordered
        .iter()
        .take(top_skills_limit)
        .map(|s| TopSkill {
            name: s.name.clone(),
            score: s.proficiency_score,
        })
        .collect();

    let entries = ordered
        .into_iter()
        .map(|s| SkillEntry {
            name: s.name.clone(),
            category: s.category.name().to_string(),
            description: s.description.clone(),
            proficiency_score: s.proficiency_score,
            evidence_count: s.evidence.len(),
            evidence: s.evidence.iter().map(EvidenceEntry::from).collect(),
        })
        .collect();

    SkillReport {
        skills: entries,
        summary: Summary {
            total_skills: skills.len(),
            by_category,
            top_skills,
        },
        progression,
    }
}

impl SkillReport {
    /// Serialize to the JSON the boundary expects.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
