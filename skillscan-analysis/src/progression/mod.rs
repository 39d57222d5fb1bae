//! Progression builder — joins skill evidence with the commit timeline.
//!
//! The one place two independently-built structures must agree: evidence
//! carries file paths, the timeline carries months, and the caller-supplied
//! file → last-touched-month lookup bridges them. The join is explicit and
//! has a documented fallback: evidence whose file resolves to no month is
//! excluded from the progression but still counts toward the flat skill
//! score.

use skillscan_core::errors::ProgressionError;
use skillscan_core::types::collections::FxHashMap;
use skillscan_core::types::{ProgressionEntry, Skill, TimelinePeriod};

use crate::timeline;

/// Per-month evidence totals accumulated before the period pass.
#[derive(Default)]
struct MonthBucket {
    skill_counts: FxHashMap<String, u32>,
    evidence_count: u32,
}

/// Build the ordered progression: one entry per timeline period with at
/// least one resolvable evidence item, ascending, same order as the
/// timeline.
///
/// Single left-to-right pass over periods with an inner grouping step; no
/// global re-sort of evidence. Evidence for the same skill in the same file
/// and month on different lines counts every time — volume is the signal.
pub fn build_progression(
    skills: &FxHashMap<String, Skill>,
    periods: &[TimelinePeriod],
    file_last_touched: &FxHashMap<String, String>,
    top_skills_limit: usize,
) -> Result<Vec<ProgressionEntry>, ProgressionError> {
    timeline::validate(periods)?;

    // One pass over all evidence to bucket it by resolved month.
    let mut by_month: FxHashMap<&str, MonthBucket> = FxHashMap::default();
    for skill in skills.values() {
        for item in &skill.evidence {
            let Some(month) = file_last_touched.get(&item.file_path) else {
                continue;
            };
            let bucket = by_month.entry(month.as_str()).or_default();
            *bucket.skill_counts.entry(skill.name.clone()).or_insert(0) += 1;
            bucket.evidence_count += 1;
        }
    }

    let mut progression = Vec::new();
    for period in periods {
        let Some(bucket) = by_month.remove(period.month.as_str()) else {
            continue;
        };

        let mut ranked: Vec<(String, u32)> = bucket.skill_counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        progression.push(ProgressionEntry {
            period_label: period.month.clone(),
            skill_count: ranked.len() as u32,
            top_skills: ranked
                .into_iter()
                .take(top_skills_limit)
                .map(|(name, _)| name)
                .collect(),
            evidence_count: bucket.evidence_count,
            commits: period.commits,
            contributors: period.contributors,
            commit_messages: period.messages.clone(),
            top_files: period.top_files.clone(),
            period_languages: period.languages.clone(),
        });
    }

    tracing::debug!(
        periods = periods.len(),
        entries = progression.len(),
        "built progression"
    );
    Ok(progression)
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillscan_core::types::{EvidenceItem, SkillCategory};

    fn skill(name: &str, files: &[(&str, u32)]) -> Skill {
        let evidence: Vec<EvidenceItem> = files
            .iter()
            .map(|(file, line)| EvidenceItem::code_pattern(name, "match", *file, *line, 0.7))
            .collect();
        let score = crate::aggregate::proficiency_score(evidence.len());
        Skill {
            name: name.to_string(),
            category: SkillCategory::Practices,
            description: "test skill".to_string(),
            evidence,
            proficiency_score: score,
        }
    }

    fn skills_map(skills: Vec<Skill>) -> FxHashMap<String, Skill> {
        skills.into_iter().map(|s| (s.name.clone(), s)).collect()
    }

    fn lookup(entries: &[(&str, &str)]) -> FxHashMap<String, String> {
        entries
            .iter()
            .map(|(f, m)| (f.to_string(), m.to_string()))
            .collect()
    }

    fn period(month: &str, commits: u32) -> TimelinePeriod {
        TimelinePeriod {
            month: month.to_string(),
            commits,
            contributors: 1,
            messages: vec![format!("commit in {month}")],
            top_files: vec!["a.py".to_string()],
            languages: Default::default(),
        }
    }

    #[test]
    fn empty_timeline_yields_empty_progression() {
        let skills = skills_map(vec![skill("Type Hints", &[("a.py", 1)])]);
        let progression =
            build_progression(&skills, &[], &lookup(&[("a.py", "2025-01")]), 5).unwrap();
        assert!(progression.is_empty());
    }

    #[test]
    fn evidence_resolves_to_its_months() {
        let skills = skills_map(vec![
            skill("Type Hints", &[("a.py", 1), ("b.py", 4)]),
            skill("Error Handling", &[("a.py", 2)]),
        ]);
        let periods = vec![period("2025-01", 3), period("2025-02", 1)];
        let files = lookup(&[("a.py", "2025-01"), ("b.py", "2025-02")]);

        let progression = build_progression(&skills, &periods, &files, 5).unwrap();

        assert_eq!(progression.len(), 2);
        assert_eq!(progression[0].period_label, "2025-01");
        assert_eq!(progression[0].evidence_count, 2);
        assert_eq!(progression[0].skill_count, 2);
        assert_eq!(progression[1].period_label, "2025-02");
        assert_eq!(progression[1].evidence_count, 1);
        assert_eq!(progression[1].top_skills, vec!["Type Hints"]);
        // context carried from the period
        assert_eq!(progression[0].commits, 3);
        assert_eq!(progression[0].commit_messages, vec!["commit in 2025-01"]);
    }

    #[test]
    fn months_without_evidence_are_omitted() {
        let skills = skills_map(vec![skill("Type Hints", &[("a.py", 1)])]);
        let periods = vec![
            period("2025-01", 2),
            period("2025-02", 0),
            period("2025-03", 1),
        ];
        let files = lookup(&[("a.py", "2025-03")]);

        let progression = build_progression(&skills, &periods, &files, 5).unwrap();
        assert_eq!(progression.len(), 1);
        assert_eq!(progression[0].period_label, "2025-03");
    }

    #[test]
    fn unresolvable_files_are_excluded_but_not_lost_upstream() {
        let skills = skills_map(vec![skill("Type Hints", &[("a.py", 1), ("deleted.py", 2)])]);
        let periods = vec![period("2025-01", 1)];
        let files = lookup(&[("a.py", "2025-01")]);

        let progression = build_progression(&skills, &periods, &files, 5).unwrap();
        assert_eq!(progression[0].evidence_count, 1);
        // flat inventory still counts both
        assert_eq!(skills["Type Hints"].evidence_count(), 2);
    }

    #[test]
    fn ranking_is_count_desc_then_name_asc() {
        let skills = skills_map(vec![
            skill("Zebra", &[("a.py", 1), ("a.py", 2)]),
            skill("Apple", &[("a.py", 3), ("a.py", 4)]),
            skill("Mango", &[("a.py", 5), ("a.py", 6), ("a.py", 7)]),
        ]);
        let periods = vec![period("2025-01", 1)];
        let files = lookup(&[("a.py", "2025-01")]);

        let progression = build_progression(&skills, &periods, &files, 5).unwrap();
        assert_eq!(progression[0].top_skills, vec!["Mango", "Apple", "Zebra"]);
    }

    #[test]
    fn top_skills_respects_the_limit() {
        let skills = skills_map(vec![
            skill("A", &[("a.py", 1)]),
            skill("B", &[("a.py", 2)]),
            skill("C", &[("a.py", 3)]),
        ]);
        let periods = vec![period("2025-01", 1)];
        let files = lookup(&[("a.py", "2025-01")]);

        let progression = build_progression(&skills, &periods, &files, 2).unwrap();
        assert_eq!(progression[0].top_skills.len(), 2);
        assert_eq!(progression[0].skill_count, 3);
    }

    #[test]
    fn same_skill_same_file_different_lines_all_count() {
        let skills = skills_map(vec![skill("Type Hints", &[("a.py", 1), ("a.py", 9)])]);
        let periods = vec![period("2025-01", 1)];
        let files = lookup(&[("a.py", "2025-01")]);

        let progression = build_progression(&skills, &periods, &files, 5).unwrap();
        assert_eq!(progression[0].evidence_count, 2);
    }

    #[test]
    fn progression_coverage_never_exceeds_total_evidence() {
        let skills = skills_map(vec![
            skill("A", &[("a.py", 1), ("gone.py", 2)]),
            skill("B", &[("b.py", 3)]),
        ]);
        let periods = vec![period("2025-01", 1), period("2025-02", 1)];
        let files = lookup(&[("a.py", "2025-01"), ("b.py", "2025-02")]);

        let progression = build_progression(&skills, &periods, &files, 5).unwrap();
        let resolved: u32 = progression.iter().map(|e| e.evidence_count).sum();
        let total: usize = skills.values().map(|s| s.evidence_count()).sum();
        assert!(resolved as usize <= total);
        assert_eq!(resolved, 2);
    }

    #[test]
    fn invalid_timeline_rejects_whole_build() {
        let skills = skills_map(vec![skill("A", &[("a.py", 1)])]);
        let periods = vec![period("2025-02", 1), period("2025-01", 1)];
        let files = lookup(&[("a.py", "2025-01")]);

        let err = build_progression(&skills, &periods, &files, 5).unwrap_err();
        assert!(matches!(err, ProgressionError::UnorderedTimeline { .. }));
    }
}
