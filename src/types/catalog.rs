use crate::error::GaugeError;
use serde::Deserialize;
use std::collections::HashSet;

/// Template catalog file contents. When `extend` is set the listed templates
/// are appended to the built-in catalog instead of replacing it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub extend: bool,
    #[serde(default)]
    pub templates: Vec<TemplateDescriptor>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TemplateDescriptor {
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CatalogConfig {
    pub fn validate(&self) -> Result<(), GaugeError> {
        let mut seen = HashSet::<String>::new();
        for template in &self.templates {
            let name = template.name.trim();
            if name.is_empty() {
                return Err(GaugeError::CatalogParse(
                    "template entries must have a non-empty name".to_string(),
                ));
            }
            if template.label.trim().is_empty() {
                return Err(GaugeError::CatalogParse(format!(
                    "template '{name}' must have a non-empty label"
                )));
            }
            if !seen.insert(name.to_lowercase()) {
                return Err(GaugeError::CatalogParse(format!(
                    "duplicate template name: {name}"
                )));
            }
        }
        Ok(())
    }
}
