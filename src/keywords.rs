use crate::error::Result;
use crate::types::catalog::TemplateDescriptor;
use regex::Regex;
use std::collections::HashSet;

/// Imperative verbs and question words signaling task intent.
pub const ACTION_KEYWORDS: [&str; 18] = [
    "create",
    "build",
    "make",
    "add",
    "fix",
    "refactor",
    "implement",
    "generate",
    "explain",
    "what",
    "how",
    "why",
    "update",
    "change",
    "remove",
    "delete",
    "integrate",
    "deploy",
];

/// Common technology terms, always present regardless of the catalog.
pub const BASE_TECH_TERMS: [&str; 18] = [
    "react",
    "vue",
    "angular",
    "svelte",
    "tailwind",
    "css",
    "html",
    "javascript",
    "typescript",
    "node.js",
    "python",
    "docker",
    "database",
    "api",
    "server",
    "client",
    "mobile",
    "web",
];

/// Immutable keyword reference sets, built once at startup. Action keywords
/// are compiled to whole-word patterns; technology terms are a lower-cased
/// membership set fed by the template catalog plus the base list.
#[derive(Debug, Clone)]
pub struct KeywordSets {
    action_patterns: Vec<Regex>,
    tech_terms: HashSet<String>,
}

impl KeywordSets {
    pub fn build(templates: &[TemplateDescriptor]) -> Result<Self> {
        let mut action_patterns = Vec::with_capacity(ACTION_KEYWORDS.len());
        for keyword in ACTION_KEYWORDS {
            let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(keyword)))?;
            action_patterns.push(pattern);
        }

        let mut tech_terms = HashSet::new();
        for template in templates {
            tech_terms.insert(template.name.to_lowercase());
            tech_terms.insert(template.label.to_lowercase());
            for tag in &template.tags {
                tech_terms.insert(tag.to_lowercase());
            }
        }
        for term in BASE_TECH_TERMS {
            tech_terms.insert(term.to_string());
        }

        Ok(Self {
            action_patterns,
            tech_terms,
        })
    }

    /// Degenerate configuration: both reference sets empty. The scorer must
    /// still produce a valid score from the remaining components.
    #[allow(dead_code)]
    pub fn empty() -> Self {
        Self {
            action_patterns: Vec::new(),
            tech_terms: HashSet::new(),
        }
    }

    pub fn action_patterns(&self) -> &[Regex] {
        &self.action_patterns
    }

    pub fn is_tech_term(&self, word: &str) -> bool {
        self.tech_terms.contains(word)
    }

    pub fn tech_terms_sorted(&self) -> Vec<&str> {
        let mut terms: Vec<&str> = self.tech_terms.iter().map(String::as_str).collect();
        terms.sort_unstable();
        terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(name: &str, label: &str, tags: &[&str]) -> TemplateDescriptor {
        TemplateDescriptor {
            name: name.to_string(),
            label: label.to_string(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
        }
    }

    #[test]
    fn build_flattens_names_labels_and_tags_lowercased() {
        let templates = [template("Vite-React", "React + Vite", &["Frontend", "SPA"])];
        let sets = KeywordSets::build(&templates).expect("sets should build");
        assert!(sets.is_tech_term("vite-react"));
        assert!(sets.is_tech_term("react + vite"));
        assert!(sets.is_tech_term("frontend"));
        assert!(sets.is_tech_term("spa"));
    }

    #[test]
    fn base_terms_always_present() {
        let sets = KeywordSets::build(&[]).expect("sets should build");
        assert!(sets.is_tech_term("react"));
        assert!(sets.is_tech_term("node.js"));
        assert!(!sets.is_tech_term("component"));
    }

    #[test]
    fn action_patterns_match_whole_words_only() {
        let sets = KeywordSets::build(&[]).expect("sets should build");
        let fix = sets
            .action_patterns()
            .iter()
            .find(|pattern| pattern.as_str().contains("fix"))
            .expect("fix pattern should exist");
        assert!(fix.is_match("please fix this"));
        assert!(!fix.is_match("prefixes are different"));
    }

    #[test]
    fn empty_sets_match_nothing() {
        let sets = KeywordSets::empty();
        assert!(sets.action_patterns().is_empty());
        assert!(!sets.is_tech_term("react"));
    }
}
