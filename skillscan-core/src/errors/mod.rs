//! Error handling for Skillscan.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod aggregation_error;
pub mod config_error;
pub mod pipeline_error;
pub mod progression_error;
pub mod taxonomy_error;

pub use aggregation_error::AggregationError;
pub use config_error::ConfigError;
pub use pipeline_error::{PipelineError, PipelineResult};
pub use progression_error::ProgressionError;
pub use taxonomy_error::TaxonomyError;
