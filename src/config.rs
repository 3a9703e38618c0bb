use crate::error::{GaugeError, Result};
use crate::types::catalog::{CatalogConfig, TemplateDescriptor};
use std::path::Path;

pub const DEFAULT_CATALOG_FILE: &str = "promptgauge.toml";

/// Starter template descriptors used when no catalog file is present.
/// (name, label, tags).
const BUILTIN_TEMPLATES: &[(&str, &str, &[&str])] = &[
    ("astro-basic", "Astro Basic", &["astro", "blog", "portfolio"]),
    ("nextjs-shadcn", "Next.js with shadcn/ui", &["next.js", "react", "shadcn"]),
    ("qwik-typescript", "Qwik TypeScript", &["qwik", "performance"]),
    ("remix-typescript", "Remix TypeScript", &["remix", "fullstack"]),
    ("slidev", "Slidev Presentation", &["slidev", "presentation", "markdown"]),
    ("sveltekit", "SvelteKit", &["svelte", "sveltekit"]),
    ("vanilla-vite", "Vanilla + Vite", &["vite", "vanilla"]),
    ("vite-react", "React + Vite", &["react", "vite", "frontend"]),
    ("vite-typescript", "Vite + TypeScript", &["vite", "typescript", "minimal"]),
    ("vue", "Vue.js", &["vue", "spa"]),
    ("angular-basic", "Angular Basic", &["angular", "spa"]),
    ("expo-app", "Expo App", &["expo", "react-native", "mobile"]),
];

pub fn builtin_templates() -> Vec<TemplateDescriptor> {
    BUILTIN_TEMPLATES
        .iter()
        .map(|(name, label, tags)| TemplateDescriptor {
            name: name.to_string(),
            label: label.to_string(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
        })
        .collect()
}

/// Loads the catalog file. An explicit path must exist; the default file in
/// `root` is optional and `None` means the built-in catalog applies.
pub fn load_catalog(root: &Path, explicit: Option<&Path>) -> Result<Option<CatalogConfig>> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(GaugeError::PathNotFound(path.display().to_string()));
            }
            path.to_path_buf()
        }
        None => {
            let default = root.join(DEFAULT_CATALOG_FILE);
            if !default.exists() {
                return Ok(None);
            }
            default
        }
    };

    let catalog = read_catalog(&path)?;
    catalog.validate()?;
    Ok(Some(catalog))
}

fn read_catalog(path: &Path) -> Result<CatalogConfig> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| GaugeError::CatalogParse(format!("{}: {}", path.display(), e)))
}

pub fn resolve_templates(catalog: Option<&CatalogConfig>) -> Vec<TemplateDescriptor> {
    match catalog {
        None => builtin_templates(),
        Some(catalog) if catalog.extend => {
            let mut templates = builtin_templates();
            templates.extend(catalog.templates.iter().cloned());
            templates
        }
        Some(catalog) => catalog.templates.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_catalog_returns_none_when_default_file_missing() {
        let dir = TempDir::new().expect("temp dir should be created");
        let catalog = load_catalog(dir.path(), None).expect("load should not fail");
        assert!(catalog.is_none());
    }

    #[test]
    fn load_catalog_reads_default_file_from_root() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(
            dir.path().join(DEFAULT_CATALOG_FILE),
            r#"
[[templates]]
name = "fortran-starter"
label = "Fortran Starter"
tags = ["fortran"]
"#,
        )
        .expect("catalog file should write");

        let catalog = load_catalog(dir.path(), None)
            .expect("load should succeed")
            .expect("catalog should be present");
        assert_eq!(catalog.templates.len(), 1);
        assert_eq!(catalog.templates[0].name, "fortran-starter");
    }

    #[test]
    fn load_catalog_rejects_missing_explicit_path() {
        let dir = TempDir::new().expect("temp dir should be created");
        let missing = dir.path().join("nope.toml");
        let err = load_catalog(dir.path(), Some(&missing)).expect_err("load should fail");
        assert!(err.to_string().contains("path does not exist"));
    }

    #[test]
    fn load_catalog_rejects_invalid_entries() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("bad.toml");
        fs::write(
            &path,
            r#"
[[templates]]
name = ""
label = "Broken"
"#,
        )
        .expect("catalog file should write");

        let err = load_catalog(dir.path(), Some(&path)).expect_err("load should fail");
        assert!(err.to_string().contains("non-empty name"));
    }

    #[test]
    fn resolve_templates_replaces_builtins_by_default() {
        let catalog: CatalogConfig = toml::from_str(
            r#"
[[templates]]
name = "zig-starter"
label = "Zig Starter"
"#,
        )
        .expect("catalog should parse");

        let templates = resolve_templates(Some(&catalog));
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].name, "zig-starter");
    }

    #[test]
    fn resolve_templates_appends_when_extend_is_set() {
        let catalog: CatalogConfig = toml::from_str(
            r#"
extend = true

[[templates]]
name = "zig-starter"
label = "Zig Starter"
"#,
        )
        .expect("catalog should parse");

        let templates = resolve_templates(Some(&catalog));
        assert_eq!(templates.len(), BUILTIN_TEMPLATES.len() + 1);
        assert!(templates.iter().any(|template| template.name == "vue"));
        assert!(templates.iter().any(|template| template.name == "zig-starter"));
    }
}
