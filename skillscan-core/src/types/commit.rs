//! Pre-parsed commit records consumed by the timeline builder.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One commit from an already-parsed history.
///
/// Git access itself is out of scope; callers hand the engine whatever their
/// history extractor produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitRecord {
    pub author: String,
    pub date: NaiveDate,
    pub message: String,
    /// Paths changed by this commit, relative to the project root.
    pub files: Vec<String>,
    /// Per-language touch counts for this commit.
    #[serde(default)]
    pub languages: BTreeMap<String, u32>,
}
