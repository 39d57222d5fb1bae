//! Cooperative cancellation for analysis runs.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::errors::{PipelineError, PipelineResult};

/// Shared flag that aborts an in-flight analysis run.
///
/// Runs are all-or-nothing: once cancelled, the pipeline returns
/// `PipelineError::Cancelled` and discards any partial evidence rather than
/// producing a partial skill inventory. Cloning shares the flag, so a caller
/// can hand one clone to the pipeline and keep another to cancel from a
/// different thread.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Every clone of this token observes it.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Abort the run if cancellation was requested. Pipeline phases call
    /// this at their boundaries; `?` propagates the abort.
    pub fn checkpoint(&self) -> PipelineResult<()> {
        if self.is_cancelled() {
            Err(PipelineError::Cancelled)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_token_passes_checkpoints() {
        let token = CancellationToken::new();
        assert!(!token.is_cancelled());
        assert!(token.checkpoint().is_ok());
    }

    #[test]
    fn clones_share_the_flag() {
        let token = CancellationToken::new();
        let handle = token.clone();
        handle.cancel();

        assert!(token.is_cancelled());
        assert!(matches!(
            token.checkpoint().unwrap_err(),
            PipelineError::Cancelled
        ));
    }
}
