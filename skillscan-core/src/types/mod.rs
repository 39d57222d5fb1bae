//! Shared data model: evidence, skills, timeline periods, progression entries.

pub mod collections;

mod commit;
mod evidence;
mod progression;
mod skill;
mod timeline;

pub use commit::CommitRecord;
pub use evidence::{EvidenceItem, EvidenceKind};
pub use progression::ProgressionEntry;
pub use skill::{Skill, SkillCategory};
pub use timeline::TimelinePeriod;

use serde::{Deserialize, Serialize};

/// A source file handed to the engine: path plus already-decoded text.
///
/// File discovery, reading, and decoding are the caller's job; the engine
/// never touches the filesystem for source content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFile {
    /// Path relative to the project root.
    pub path: String,
    /// Full file text.
    pub text: String,
}

impl SourceFile {
    pub fn new(path: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }
}
