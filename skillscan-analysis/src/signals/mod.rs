//! Non-scanner evidence producers.
//!
//! Two collaborator-origin signal kinds join the scanner's evidence pool
//! before aggregation: `practice` evidence derived from commit-history shape,
//! and `metric` evidence derived from a caller-supplied code-quality summary.
//! Both use fixed thresholds and fixed confidences, same as taxonomy rules.

use serde::{Deserialize, Serialize};

use skillscan_core::types::collections::FxHashSet;
use skillscan_core::types::{CommitRecord, EvidenceItem, EvidenceKind};

/// Caller-supplied code-quality summary.
///
/// Produced by an external complexity/quality analyzer; only the handful of
/// fields the evidence producers care about are modeled here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QualitySummary {
    /// Mean cyclomatic complexity across functions, if computed.
    pub average_complexity: Option<f32>,
    /// Comment lines over total lines, if computed.
    pub comment_ratio: Option<f32>,
    /// Number of files recognized as test files.
    pub test_file_count: u32,
}

/// Minimum commits for a sustained-history signal.
const SUSTAINED_COMMITS: usize = 10;
/// Minimum commits before authorship shape is worth reading.
const MIN_COMMITS_FOR_AUTHORSHIP: usize = 5;
/// Mean commit-message word count at or above this reads as descriptive.
const DESCRIPTIVE_MESSAGE_WORDS: f32 = 4.0;
/// Complexity at or below this reads as maintainable.
const LOW_COMPLEXITY: f32 = 5.0;
/// Comment ratio at or above this reads as documented.
const DOCUMENTED_RATIO: f32 = 0.10;

/// Derive `practice` evidence from commit-history shape.
///
/// Emitted items are project-wide: no file anchor, no line, so they score in
/// the flat inventory but never join the progression.
pub fn commit_practices(commits: &[CommitRecord]) -> Vec<EvidenceItem> {
    let mut evidence = Vec::new();
    if commits.is_empty() {
        return evidence;
    }

    if commits.len() >= SUSTAINED_COMMITS {
        evidence.push(EvidenceItem::project_wide(
            "Version Control",
            EvidenceKind::Practice,
            format!("Sustained commit history ({} commits)", commits.len()),
            0.9,
        ));
    }

    let mean_words = commits
        .iter()
        .map(|c| c.message.split_whitespace().count())
        .sum::<usize>() as f32
        / commits.len() as f32;
    if commits.len() >= MIN_COMMITS_FOR_AUTHORSHIP && mean_words >= DESCRIPTIVE_MESSAGE_WORDS {
        evidence.push(EvidenceItem::project_wide(
            "Version Control",
            EvidenceKind::Practice,
            "Descriptive commit messages".to_string(),
            0.7,
        ));
    }

    let authors: FxHashSet<&str> = commits.iter().map(|c| c.author.as_str()).collect();
    if commits.len() >= MIN_COMMITS_FOR_AUTHORSHIP && authors.len() == 1 {
        evidence.push(EvidenceItem::project_wide(
            "Version Control",
            EvidenceKind::Practice,
            "Consistent single-author history".to_string(),
            0.6,
        ));
    }
    if authors.len() >= 2 {
        evidence.push(EvidenceItem::project_wide(
            "Collaboration",
            EvidenceKind::Practice,
            format!("{} distinct contributors", authors.len()),
            0.8,
        ));
    }

    evidence
}

/// Derive `metric` evidence from a quality summary.
pub fn quality_metrics(summary: &QualitySummary) -> Vec<EvidenceItem> {
    let mut evidence = Vec::new();

    if let Some(complexity) = summary.average_complexity {
        if complexity <= LOW_COMPLEXITY {
            evidence.push(EvidenceItem::project_wide(
                "Maintainable Code",
                EvidenceKind::Metric,
                format!("Low average cyclomatic complexity ({complexity:.1})"),
                0.7,
            ));
        }
    }

    if let Some(ratio) = summary.comment_ratio {
        if ratio >= DOCUMENTED_RATIO {
            evidence.push(EvidenceItem::project_wide(
                "Documentation",
                EvidenceKind::Metric,
                format!("Comment density {:.0}%", ratio * 100.0),
                0.6,
            ));
        }
    }

    if summary.test_file_count > 0 {
        evidence.push(EvidenceItem::project_wide(
            "Unit Testing",
            EvidenceKind::Metric,
            format!("{} test files present", summary.test_file_count),
            0.8,
        ));
    }

    evidence
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn commit(author: &str, day: u32) -> CommitRecord {
        CommitRecord {
            author: author.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
            message: "update".to_string(),
            files: vec!["src/app.py".to_string()],
            languages: BTreeMap::new(),
        }
    }

    #[test]
    fn empty_history_yields_nothing() {
        assert!(commit_practices(&[]).is_empty());
    }

    #[test]
    fn sustained_history_emits_version_control() {
        let commits: Vec<_> = (1..=12).map(|d| commit("ada", d)).collect();
        let evidence = commit_practices(&commits);
        assert!(evidence
            .iter()
            .any(|e| e.skill_name == "Version Control" && e.kind == EvidenceKind::Practice));
        // project-wide: no file anchor
        assert!(evidence.iter().all(|e| e.file_path.is_empty() && e.line.is_none()));
    }

    #[test]
    fn descriptive_messages_emit_version_control() {
        let commits: Vec<_> = (1..=6)
            .map(|d| {
                let mut c = commit("ada", d);
                c.message = "refactor the scanner to keep rule order stable".to_string();
                c
            })
            .collect();
        let evidence = commit_practices(&commits);
        assert!(evidence
            .iter()
            .any(|e| e.description == "Descriptive commit messages"));
    }

    #[test]
    fn terse_messages_do_not() {
        let commits: Vec<_> = (1..=6).map(|d| commit("ada", d)).collect();
        let evidence = commit_practices(&commits);
        assert!(!evidence
            .iter()
            .any(|e| e.description == "Descriptive commit messages"));
    }

    #[test]
    fn multiple_authors_emit_collaboration() {
        let commits = vec![commit("ada", 1), commit("grace", 2)];
        let evidence = commit_practices(&commits);
        assert!(evidence.iter().any(|e| e.skill_name == "Collaboration"));
        assert!(!evidence.iter().any(|e| e.description.contains("single-author")));
    }

    #[test]
    fn low_complexity_and_tests_emit_metrics() {
        let summary = QualitySummary {
            average_complexity: Some(3.2),
            comment_ratio: Some(0.02),
            test_file_count: 4,
        };
        let evidence = quality_metrics(&summary);
        let names: Vec<_> = evidence.iter().map(|e| e.skill_name.as_str()).collect();
        assert!(names.contains(&"Maintainable Code"));
        assert!(names.contains(&"Unit Testing"));
        assert!(!names.contains(&"Documentation"));
        assert!(evidence.iter().all(|e| e.kind == EvidenceKind::Metric));
    }

    #[test]
    fn high_complexity_emits_nothing() {
        let summary = QualitySummary {
            average_complexity: Some(14.0),
            comment_ratio: None,
            test_file_count: 0,
        };
        assert!(quality_metrics(&summary).is_empty());
    }
}
