//! Analysis pipeline — scan fan-out, signal merge, aggregation, progression.
//!
//! Phases run in a fixed order: filter and scan every file (parallel,
//! no shared mutable state), merge collaborator signals into the evidence
//! pool, aggregate into skills, then build the timeline join. Aggregation
//! waits on the full evidence set — scores are a function of the whole pool,
//! never incremental.

use std::sync::Arc;

use rayon::prelude::*;

use skillscan_core::cancel::CancellationToken;
use skillscan_core::config::ScanSettings;
use skillscan_core::errors::PipelineResult;
use skillscan_core::types::{CommitRecord, EvidenceItem, Skill, SourceFile, TimelinePeriod};
use skillscan_core::types::collections::FxHashMap;

use crate::aggregate::Aggregator;
use crate::export::{self, SkillReport};
use crate::progression;
use crate::scanner::{Language, Scanner};
use crate::signals::{self, QualitySummary};
use crate::taxonomy::Taxonomy;
use crate::timeline;

/// Bytes sniffed for binary content.
const BINARY_SNIFF_LEN: usize = 1024;

/// Per-run scan accounting, surfaced to the caller alongside results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub files_scanned: usize,
    pub files_skipped_oversize: usize,
    pub files_skipped_binary: usize,
    pub files_unknown_language: usize,
    pub evidence_items: usize,
}

/// Everything one analysis run produces.
#[derive(Debug)]
pub struct AnalysisResult {
    pub skills: FxHashMap<String, Skill>,
    pub timeline: Vec<TimelinePeriod>,
    pub progression: Vec<skillscan_core::types::ProgressionEntry>,
    pub stats: ScanStats,
}

impl AnalysisResult {
    /// Flatten into the boundary export shape.
    pub fn to_report(&self, top_skills_limit: usize) -> SkillReport {
        export::build_report(&self.skills, self.progression.clone(), top_skills_limit)
    }
}

enum FileOutcome {
    Evidence(Vec<EvidenceItem>),
    SkippedOversize,
    SkippedBinary,
    UnknownLanguage,
}

/// Orchestrates a full analysis run over in-memory inputs.
pub struct AnalysisPipeline {
    scanner: Scanner,
    settings: ScanSettings,
    token: Option<CancellationToken>,
}

impl AnalysisPipeline {
    pub fn new(taxonomy: Arc<Taxonomy>, settings: ScanSettings) -> Self {
        Self {
            scanner: Scanner::new(taxonomy),
            settings,
            token: None,
        }
    }

    /// Attach a cancellation token. A cancelled run returns
    /// `PipelineError::Cancelled` and discards all partial evidence — there
    /// is no partial-inventory contract.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.token = Some(token);
        self
    }

    fn cancelled(&self) -> bool {
        self.token.as_ref().is_some_and(|t| t.is_cancelled())
    }

    fn check_cancelled(&self) -> PipelineResult<()> {
        match &self.token {
            Some(token) => token.checkpoint(),
            None => Ok(()),
        }
    }

    /// Run the full pipeline.
    pub fn run(
        &self,
        files: &[SourceFile],
        commits: &[CommitRecord],
        quality: Option<&QualitySummary>,
    ) -> PipelineResult<AnalysisResult> {
        self.check_cancelled()?;

        let (mut evidence, stats) = self.scan_files(files);
        self.check_cancelled()?;

        evidence.extend(signals::commit_practices(commits));
        if let Some(summary) = quality {
            evidence.extend(signals::quality_metrics(summary));
        }
        let stats = ScanStats {
            evidence_items: evidence.len(),
            ..stats
        };

        let mut aggregator = Aggregator::new(self.scanner.taxonomy_arc());
        if !self.settings.strict_taxonomy {
            aggregator = aggregator.lenient();
        }
        let skills = aggregator.aggregate(evidence)?;
        self.check_cancelled()?;

        let periods = timeline::build_timeline(commits);
        let file_months = timeline::file_last_touched(commits);
        let progression = progression::build_progression(
            &skills,
            &periods,
            &file_months,
            self.settings.top_skills_limit,
        )?;

        tracing::info!(
            skills = skills.len(),
            periods = periods.len(),
            progression = progression.len(),
            files_scanned = stats.files_scanned,
            "analysis complete"
        );

        Ok(AnalysisResult {
            skills,
            timeline: periods,
            progression,
            stats,
        })
    }

    /// Scan all files, in parallel when a pool is available. Per-file
    /// problems are skips, never errors; evidence order follows input file
    /// order so runs stay reproducible.
    fn scan_files(&self, files: &[SourceFile]) -> (Vec<EvidenceItem>, ScanStats) {
        let scan_one = |file: &SourceFile| -> FileOutcome {
            if self.cancelled() {
                // the run is about to be discarded; skip the work
                return FileOutcome::Evidence(Vec::new());
            }
            if file.text.len() as u64 > self.settings.max_file_size {
                return FileOutcome::SkippedOversize;
            }
            if looks_binary(&file.text) {
                return FileOutcome::SkippedBinary;
            }
            let Some(language) = Language::from_path(&file.path) else {
                return FileOutcome::UnknownLanguage;
            };
            FileOutcome::Evidence(self.scanner.scan(&file.path, language.key(), &file.text))
        };

        let outcomes: Vec<FileOutcome> = match self.settings.threads {
            Some(n) => match rayon::ThreadPoolBuilder::new().num_threads(n).build() {
                Ok(pool) => pool.install(|| files.par_iter().map(scan_one).collect()),
                Err(e) => {
                    tracing::warn!(error = %e, "falling back to global thread pool");
                    files.par_iter().map(scan_one).collect()
                }
            },
            None => files.par_iter().map(scan_one).collect(),
        };

        let mut stats = ScanStats::default();
        let mut evidence = Vec::new();
        for outcome in outcomes {
            match outcome {
                FileOutcome::Evidence(items) => {
                    stats.files_scanned += 1;
                    evidence.extend(items);
                }
                FileOutcome::SkippedOversize => stats.files_skipped_oversize += 1,
                FileOutcome::SkippedBinary => stats.files_skipped_binary += 1,
                FileOutcome::UnknownLanguage => stats.files_unknown_language += 1,
            }
        }
        if stats.files_skipped_oversize + stats.files_skipped_binary > 0 {
            tracing::warn!(
                oversize = stats.files_skipped_oversize,
                binary = stats.files_skipped_binary,
                "skipped unreadable files"
            );
        }
        (evidence, stats)
    }
}

/// NUL bytes in the head of the text mean the caller handed us something
/// that was never source code.
fn looks_binary(text: &str) -> bool {
    text.as_bytes()
        .iter()
        .take(BINARY_SNIFF_LEN)
        .any(|&b| b == 0)
}
