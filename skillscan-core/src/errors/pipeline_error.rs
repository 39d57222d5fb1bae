//! Pipeline errors.

use super::{AggregationError, ProgressionError};

/// Errors that abort a whole analysis run.
///
/// Per-file scan problems never reach this level; they are skipped and
/// counted. Structural invariant violations in aggregation or progression
/// abort everything, and cancellation discards partial evidence wholesale.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Aggregation(#[from] AggregationError),

    #[error(transparent)]
    Progression(#[from] ProgressionError),

    #[error("analysis cancelled")]
    Cancelled,
}

pub type PipelineResult<T> = Result<T, PipelineError>;
