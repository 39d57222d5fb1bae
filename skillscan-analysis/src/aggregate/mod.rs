//! Evidence aggregation and volume-based skill scoring.

use std::sync::Arc;

use skillscan_core::errors::AggregationError;
use skillscan_core::types::collections::FxHashMap;
use skillscan_core::types::{EvidenceItem, Skill};

use crate::taxonomy::Taxonomy;

/// Proficiency from evidence volume: `min(1.0, n*0.2 + 0.2)`.
///
/// 1 item → 0.4, 2 → 0.6, 3 → 0.8, 4 or more → 1.0. Per-item confidence is
/// deliberately not blended in: volume is the signal, confidence stays on
/// the items for display and filtering. Changing that is a behavior change,
/// not a refactor.
pub fn proficiency_score(evidence_count: usize) -> f32 {
    (evidence_count as f32 * 0.2 + 0.2).min(1.0)
}

/// Groups raw evidence into scored `Skill` entities.
pub struct Aggregator {
    taxonomy: Arc<Taxonomy>,
    strict: bool,
}

impl Aggregator {
    /// Strict aggregator: unknown skill names abort with
    /// `AggregationError::UnknownSkill`.
    pub fn new(taxonomy: Arc<Taxonomy>) -> Self {
        Self {
            taxonomy,
            strict: true,
        }
    }

    /// Lenient mode drops unknown-skill groups with a warning instead of
    /// failing — resilience against partial taxonomy updates in production.
    pub fn lenient(mut self) -> Self {
        self.strict = false;
        self
    }

    /// Group evidence by skill name and score each group.
    ///
    /// Evidence order within a group follows stream order, and nothing is
    /// deduplicated: feeding the same stream twice doubles every count. A
    /// skill with zero evidence is never materialized.
    pub fn aggregate(
        &self,
        evidence: Vec<EvidenceItem>,
    ) -> Result<FxHashMap<String, Skill>, AggregationError> {
        let mut groups: FxHashMap<String, Vec<EvidenceItem>> = FxHashMap::default();
        for item in evidence {
            groups.entry(item.skill_name.clone()).or_default().push(item);
        }

        let mut skills = FxHashMap::default();
        for (name, items) in groups {
            let entry = match self.taxonomy.lookup(&name) {
                Some(entry) => entry,
                None if self.strict => {
                    return Err(AggregationError::UnknownSkill { name });
                }
                None => {
                    tracing::warn!(skill = %name, items = items.len(), "dropping evidence for unknown skill");
                    continue;
                }
            };

            let score = proficiency_score(items.len());
            skills.insert(
                name.clone(),
                Skill {
                    name,
                    category: entry.category,
                    description: entry.description.clone(),
                    evidence: items,
                    proficiency_score: score,
                },
            );
        }

        Ok(skills)
    }
}
