//! Aggregation errors.

/// Errors raised while aggregating evidence into skills.
#[derive(Debug, thiserror::Error)]
pub enum AggregationError {
    /// Evidence references a skill the taxonomy does not define. This is a
    /// programming invariant violation, never user input; strict mode makes
    /// it fatal, lenient mode drops the group with a warning.
    #[error("evidence references unknown skill '{name}'")]
    UnknownSkill { name: String },
}
