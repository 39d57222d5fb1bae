//! Taxonomy loading and compilation errors.

/// Errors raised while loading or compiling a skill taxonomy.
#[derive(Debug, thiserror::Error)]
pub enum TaxonomyError {
    #[error("taxonomy parse error: {0}")]
    Parse(String),

    #[error("unknown category '{category}' in skill '{skill}'")]
    UnknownCategory { skill: String, category: String },

    #[error("rule compilation failed in skill '{skill}': {message}")]
    BadRule { skill: String, message: String },

    #[error("duplicate skill name '{0}'")]
    DuplicateSkill(String),
}
