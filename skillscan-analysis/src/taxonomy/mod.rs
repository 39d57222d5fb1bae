//! Declarative TOML skill taxonomy — rule authoring without recompiling.
//!
//! The taxonomy is pure data: skill → category → per-language regex rules,
//! each rule carrying a fixed confidence. It is compiled once at load time
//! and never mutated during scans. Rule authors must avoid patterns prone to
//! catastrophic backtracking; the engine does not enforce this at runtime.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use skillscan_core::errors::TaxonomyError;
use skillscan_core::types::collections::FxHashMap;
use skillscan_core::types::SkillCategory;

const BUILTIN_TAXONOMY: &str = include_str!("skills.toml");

/// A TOML-defined match rule for one language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleDef {
    /// Canonical language key ("python", "javascript", ...).
    pub language: String,
    /// Line-anchored regex applied to each source line.
    pub pattern: String,
    /// Human-readable explanation carried onto emitted evidence.
    pub description: Option<String>,
    #[serde(default = "default_confidence")]
    pub confidence: f32,
    #[serde(default)]
    pub enabled: Option<bool>,
}

fn default_confidence() -> f32 {
    0.70
}

/// A TOML-defined skill entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillDef {
    pub name: String,
    pub category: String,
    pub description: String,
    /// Skills fed only by metric/practice signals carry no rules.
    #[serde(default)]
    pub rules: Vec<RuleDef>,
}

/// Top-level taxonomy file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyFile {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub skills: Vec<SkillDef>,
}

/// A compiled rule ready for matching.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub language: String,
    pub regex: regex::Regex,
    pub description: String,
    pub confidence: f32,
}

/// A compiled skill entry: category, description, and its rules in
/// declaration order.
#[derive(Debug, Clone)]
pub struct SkillEntry {
    pub name: String,
    pub category: SkillCategory,
    pub description: String,
    pub rules: SmallVec<[CompiledRule; 4]>,
}

/// The compiled skill catalog. Immutable once loaded; share behind `Arc`.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    version: String,
    skills: Vec<SkillEntry>,
    by_name: FxHashMap<String, usize>,
}

impl Taxonomy {
    /// Compile a taxonomy from a TOML string.
    pub fn load_from_str(toml_str: &str) -> Result<Self, TaxonomyError> {
        let file: TaxonomyFile =
            toml::from_str(toml_str).map_err(|e| TaxonomyError::Parse(e.to_string()))?;

        let mut skills = Vec::with_capacity(file.skills.len());
        let mut by_name = FxHashMap::default();

        for def in file.skills {
            if by_name.contains_key(&def.name) {
                return Err(TaxonomyError::DuplicateSkill(def.name));
            }
            let entry = Self::compile(def)?;
            by_name.insert(entry.name.clone(), skills.len());
            skills.push(entry);
        }

        Ok(Self {
            version: file.version.unwrap_or_else(|| "unversioned".to_string()),
            skills,
            by_name,
        })
    }

    /// Compile a taxonomy from a TOML file on disk.
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, TaxonomyError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TaxonomyError::Parse(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::load_from_str(&content)
    }

    /// The catalog shipped with the engine.
    pub fn builtin() -> Result<Self, TaxonomyError> {
        Self::load_from_str(BUILTIN_TAXONOMY)
    }

    /// Compile a single skill definition.
    fn compile(def: SkillDef) -> Result<SkillEntry, TaxonomyError> {
        let category = SkillCategory::parse_str(&def.category).ok_or_else(|| {
            TaxonomyError::UnknownCategory {
                skill: def.name.clone(),
                category: def.category.clone(),
            }
        })?;

        let mut rules = SmallVec::new();
        for rule in def.rules {
            if rule.enabled == Some(false) {
                continue;
            }
            let regex = regex::Regex::new(&rule.pattern).map_err(|e| TaxonomyError::BadRule {
                skill: def.name.clone(),
                message: e.to_string(),
            })?;
            let description = rule
                .description
                .unwrap_or_else(|| format!("{} usage", def.name));
            rules.push(CompiledRule {
                language: rule.language,
                regex,
                description,
                confidence: rule.confidence.clamp(0.0, 1.0),
            });
        }

        Ok(SkillEntry {
            name: def.name,
            category,
            description: def.description,
            rules,
        })
    }

    /// Look up a skill entry by canonical name.
    pub fn lookup(&self, name: &str) -> Option<&SkillEntry> {
        self.by_name.get(name).map(|&i| &self.skills[i])
    }

    /// Skill entries in declaration order.
    pub fn skills(&self) -> &[SkillEntry] {
        &self.skills
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}
