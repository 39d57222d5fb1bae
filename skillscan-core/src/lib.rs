//! Core types, errors, config, cancellation, and telemetry for the Skillscan engine.
//!
//! Skillscan turns a source tree (plus optional commit history and quality
//! metrics) into an evidence-backed inventory of demonstrated engineering
//! skills. This crate holds everything shared across the workspace; the engine
//! itself lives in `skillscan-analysis`.

pub mod cancel;
pub mod config;
pub mod errors;
pub mod telemetry;
pub mod types;

pub use cancel::CancellationToken;
pub use config::ScanSettings;
pub use errors::{
    AggregationError, ConfigError, PipelineError, PipelineResult, ProgressionError,
    TaxonomyError,
};
pub use types::{
    CommitRecord, EvidenceItem, EvidenceKind, ProgressionEntry, Skill, SkillCategory,
    SourceFile, TimelinePeriod,
};
