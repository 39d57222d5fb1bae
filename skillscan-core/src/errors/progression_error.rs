//! Progression build errors.

/// Errors raised while building a skill progression from a timeline.
///
/// Any of these rejects the whole build; a partially ordered progression is
/// worse than none.
#[derive(Debug, thiserror::Error)]
pub enum ProgressionError {
    #[error("timeline is not chronologically ascending: '{previous}' then '{current}'")]
    UnorderedTimeline { previous: String, current: String },

    #[error("period label '{label}' is not in YYYY-MM form")]
    BadPeriodLabel { label: String },
}
