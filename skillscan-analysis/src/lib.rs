//! Skill evidence engine.
//!
//! The pipeline runs in phases: the scanner applies taxonomy rules to each
//! source file and emits evidence, collaborator signals (commit-history
//! practices, quality metrics) join the same evidence pool, the aggregator
//! groups and scores it into skills, and the progression builder joins those
//! skills with a per-month commit timeline to narrate how the inventory
//! evolved. `export` flattens everything into the stable boundary shape.

pub mod aggregate;
pub mod export;
pub mod pipeline;
pub mod progression;
pub mod scanner;
pub mod signals;
pub mod taxonomy;
pub mod timeline;

pub use aggregate::Aggregator;
pub use export::SkillReport;
pub use pipeline::{AnalysisPipeline, AnalysisResult, ScanStats};
pub use scanner::{Language, Scanner};
pub use taxonomy::Taxonomy;
