//! Scan settings with TOML loading, environment overrides, and validation.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Settings for an analysis run.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`SKILLSCAN_*`)
/// 2. Caller-supplied TOML
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanSettings {
    /// Files larger than this many bytes are skipped, not errors.
    pub max_file_size: u64,
    /// Worker threads for the per-file scan fan-out. `None` lets rayon pick.
    pub threads: Option<usize>,
    /// When true, evidence naming an unknown skill aborts aggregation.
    /// When false it is dropped with a warning.
    pub strict_taxonomy: bool,
    /// Cap on ranked skill names in summaries and progression entries.
    pub top_skills_limit: usize,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            max_file_size: 1_048_576,
            threads: None,
            strict_taxonomy: true,
            top_skills_limit: 5,
        }
    }
}

impl ScanSettings {
    /// Load settings from a TOML string, then apply environment overrides
    /// and validate.
    pub fn load(toml_str: &str) -> Result<Self, ConfigError> {
        let mut settings = Self::from_toml(toml_str)?;
        settings.apply_env_overrides();
        settings.validate()?;
        Ok(settings)
    }

    /// Parse settings from a TOML string without overrides or validation.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Apply `SKILLSCAN_*` environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("SKILLSCAN_MAX_FILE_SIZE") {
            if let Ok(v) = val.parse::<u64>() {
                self.max_file_size = v;
            }
        }
        if let Ok(val) = std::env::var("SKILLSCAN_THREADS") {
            if let Ok(v) = val.parse::<usize>() {
                self.threads = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SKILLSCAN_STRICT_TAXONOMY") {
            if let Ok(v) = val.parse::<bool>() {
                self.strict_taxonomy = v;
            }
        }
        if let Ok(val) = std::env::var("SKILLSCAN_TOP_SKILLS_LIMIT") {
            if let Ok(v) = val.parse::<usize>() {
                self.top_skills_limit = v;
            }
        }
    }

    /// Validate the final settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_file_size == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "max_file_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.top_skills_limit == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "top_skills_limit".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(threads) = self.threads {
            if threads == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "threads".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        Ok(())
    }
}
