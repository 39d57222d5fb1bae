//! Source scanner — applies taxonomy rules to file text and emits evidence.
//!
//! Deterministic and stateless across calls: the same input always yields the
//! same evidence set, ordered by taxonomy declaration order (skill, then
//! rule, then line).

pub mod language;

pub use language::Language;

use std::sync::Arc;

use skillscan_core::types::EvidenceItem;

use crate::taxonomy::Taxonomy;

/// Applies the taxonomy's per-language rules to source text.
///
/// The taxonomy is injected at construction and shared read-only across all
/// scans; per-file work holds no mutable state, so files may be scanned in
/// parallel freely.
#[derive(Debug, Clone)]
pub struct Scanner {
    taxonomy: Arc<Taxonomy>,
}

impl Scanner {
    pub fn new(taxonomy: Arc<Taxonomy>) -> Self {
        Self { taxonomy }
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Shared handle to the taxonomy for other pipeline phases.
    pub fn taxonomy_arc(&self) -> Arc<Taxonomy> {
        Arc::clone(&self.taxonomy)
    }

    /// Scan one file's text under the given canonical language key.
    ///
    /// Every rule defined for that language is applied to every line; each
    /// matching line emits exactly one evidence item per rule (the first
    /// occurrence on a line caps same-line noise, but distinct matching
    /// lines each emit). A language with no taxonomy rules — including a key
    /// the taxonomy has never heard of — yields an empty set, never an
    /// error.
    pub fn scan(&self, file_path: &str, language: &str, text: &str) -> Vec<EvidenceItem> {
        let mut evidence = Vec::new();

        for skill in self.taxonomy.skills() {
            for rule in skill.rules.iter().filter(|r| r.language == language) {
                for (idx, line) in text.lines().enumerate() {
                    if rule.regex.is_match(line) {
                        evidence.push(EvidenceItem::code_pattern(
                            skill.name.clone(),
                            rule.description.clone(),
                            file_path,
                            (idx + 1) as u32,
                            rule.confidence,
                        ));
                    }
                }
            }
        }

        tracing::debug!(
            file = file_path,
            language,
            items = evidence.len(),
            "scanned file"
        );
        evidence
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillscan_core::types::EvidenceKind;

    fn scanner_for(toml_str: &str) -> Scanner {
        Scanner::new(Arc::new(Taxonomy::load_from_str(toml_str).unwrap()))
    }

    const TWO_SKILLS: &str = r#"
        [[skills]]
        name = "Abstract Classes"
        category = "oop"
        description = "Abstract base types"
        [[skills.rules]]
        language = "python"
        pattern = '\bABC\b|@abstractmethod'
        description = "Abstract base class"
        confidence = 0.9

        [[skills]]
        name = "Type Hints"
        category = "practices"
        description = "Annotated signatures"
        [[skills.rules]]
        language = "python"
        pattern = '->\s*[\w\[\]]+|def\s+\w+\([^)]*:\s*\w'
        description = "Annotated signature"
        confidence = 0.8
    "#;

    #[test]
    fn emits_one_item_per_matching_line_per_rule() {
        let scanner = scanner_for(TWO_SKILLS);
        let text = "class Base(ABC):\n    def process(self, data: List) -> Dict:\n        pass\n";
        let evidence = scanner.scan("app.py", "python", text);

        assert_eq!(evidence.len(), 2);
        assert_eq!(evidence[0].skill_name, "Abstract Classes");
        assert_eq!(evidence[0].line, Some(1));
        assert_eq!(evidence[0].kind, EvidenceKind::CodePattern);
        assert!((evidence[0].confidence - 0.9).abs() < f32::EPSILON);
        assert_eq!(evidence[1].skill_name, "Type Hints");
        assert_eq!(evidence[1].line, Some(2));
    }

    #[test]
    fn multiple_matching_lines_each_emit() {
        let scanner = scanner_for(TWO_SKILLS);
        let text = "def f(x: int):\n    pass\ndef g(y: str):\n    pass\n";
        let evidence = scanner.scan("fns.py", "python", text);

        let lines: Vec<_> = evidence.iter().map(|e| e.line).collect();
        assert_eq!(lines, vec![Some(1), Some(3)]);
    }

    #[test]
    fn repeated_match_on_one_line_emits_once() {
        let scanner = scanner_for(TWO_SKILLS);
        // Two annotated parameters on the same line still yield one item.
        let evidence = scanner.scan("m.py", "python", "def h(a: int, b: str): pass\n");
        assert_eq!(evidence.len(), 1);
    }

    #[test]
    fn one_line_can_satisfy_multiple_skills() {
        let scanner = scanner_for(TWO_SKILLS);
        let evidence = scanner.scan("x.py", "python", "def run(self, x: ABC) -> None:\n");
        let names: Vec<_> = evidence.iter().map(|e| e.skill_name.as_str()).collect();
        assert_eq!(names, vec!["Abstract Classes", "Type Hints"]);
    }

    #[test]
    fn unknown_language_yields_empty_not_error() {
        let scanner = scanner_for(TWO_SKILLS);
        let evidence = scanner.scan("prog.cob", "cobol", "MOVE A TO B.\n");
        assert!(evidence.is_empty());
    }

    #[test]
    fn scan_is_deterministic_across_calls() {
        let scanner = scanner_for(TWO_SKILLS);
        let text = "class Base(ABC):\ndef f(x: int) -> int:\n";
        let first = scanner.scan("a.py", "python", text);
        let second = scanner.scan("a.py", "python", text);

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.skill_name, b.skill_name);
            assert_eq!(a.line, b.line);
            assert_eq!(a.description, b.description);
        }
    }

    proptest::proptest! {
        #[test]
        fn scanning_arbitrary_text_is_deterministic(text in "[ -~\n]{0,400}") {
            let scanner = scanner_for(TWO_SKILLS);
            let first = scanner.scan("f.py", "python", &text);
            let second = scanner.scan("f.py", "python", &text);
            proptest::prop_assert_eq!(first.len(), second.len());
            for (a, b) in first.iter().zip(second.iter()) {
                proptest::prop_assert_eq!(&a.skill_name, &b.skill_name);
                proptest::prop_assert_eq!(a.line, b.line);
            }
        }
    }

    #[test]
    fn builtin_taxonomy_matches_realistic_snippets() {
        let scanner = Scanner::new(Arc::new(Taxonomy::builtin().unwrap()));

        let py = scanner.scan("cache.py", "python", "result = memo[key]\n");
        assert!(py.iter().any(|e| e.skill_name == "Dynamic Programming"));

        let rs = scanner.scan("lib.rs", "rust", "fn load() -> Result<Config, Error> {\n");
        assert!(rs.iter().any(|e| e.skill_name == "Error Handling"));

        let go = scanner.scan("main.go", "go", "if err != nil {\n");
        assert!(go.iter().any(|e| e.skill_name == "Error Handling"));
    }
}
