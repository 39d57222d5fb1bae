//! Timeline periods — one calendar month of aggregated commit activity.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One calendar month of aggregated commit activity.
///
/// Sequences of periods are ascending and contiguous: a month with zero
/// commits between two active months still appears, with `commits = 0`.
/// Counts are unsigned, so negative values are unrepresentable; ordering and
/// label format are validated when a progression is built.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimelinePeriod {
    /// Month label in `YYYY-MM` form, unique within a sequence.
    pub month: String,
    pub commits: u32,
    pub contributors: u32,
    /// Commit messages in commit order.
    pub messages: Vec<String>,
    /// Most-touched files this month, ranked by touch count.
    pub top_files: Vec<String>,
    /// Commit-touch count per canonical language key.
    pub languages: BTreeMap<String, u32>,
}

impl TimelinePeriod {
    /// An empty period for a month with no commits.
    pub fn empty(month: impl Into<String>) -> Self {
        Self {
            month: month.into(),
            ..Self::default()
        }
    }
}
