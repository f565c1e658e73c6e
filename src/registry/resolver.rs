//! Template lookup, listing and filtering.
//!
//! The [`Registry`] is keyed by template ID, so duplicate IDs cannot
//! coexist. Storage order is unspecified; every operation that returns a
//! sequence sorts by ID before returning.

use crate::error::{CatalogError, Result};
use crate::registry::template::Template;
use std::collections::HashMap;

/// Immutable table of templates keyed by ID.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    templates: HashMap<String, Template>,
}

impl Registry {
    /// Build a registry from a list of templates.
    ///
    /// A later template with the same ID replaces an earlier one.
    pub fn from_templates(templates: impl IntoIterator<Item = Template>) -> Self {
        let mut map = HashMap::new();
        for template in templates {
            let id = template.id.clone();
            if map.insert(id.clone(), template).is_some() {
                tracing::warn!("Duplicate template ID '{}', keeping the last entry", id);
            }
        }
        tracing::debug!("Registry built with {} templates", map.len());
        Self { templates: map }
    }

    /// Number of registered templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if the registry holds no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Look up a template by ID and check its invariants.
    ///
    /// Returns an independent copy of the stored template.
    pub fn get(&self, id: &str) -> Result<Template> {
        let template = self
            .templates
            .get(id)
            .ok_or_else(|| CatalogError::NotFound { id: id.to_string() })?;

        template.validate().map_err(|source| CatalogError::Invalid {
            id: id.to_string(),
            source,
        })?;

        tracing::debug!("Resolved template '{}' at {}", id, template.short_commit());
        Ok(template.clone())
    }

    /// All templates, sorted by ID.
    pub fn list(&self) -> Vec<Template> {
        let mut templates: Vec<Template> = self.templates.values().cloned().collect();
        templates.sort_by(|a, b| a.id.cmp(&b.id));
        templates
    }

    /// Non-deprecated templates, sorted by ID.
    pub fn list_active(&self) -> Vec<Template> {
        self.list().into_iter().filter(|t| !t.deprecated).collect()
    }

    /// Active templates that are language-agnostic or match `language` exactly.
    pub fn filter_by_language(&self, language: &str) -> Vec<Template> {
        self.list_active()
            .into_iter()
            .filter(|t| t.matches_language(language))
            .collect()
    }

    /// Active templates carrying `tag`.
    pub fn filter_by_tag(&self, tag: &str) -> Vec<Template> {
        self.list_active()
            .into_iter()
            .filter(|t| t.has_tag(tag))
            .collect()
    }

    /// Check that `id` exists and is valid without returning the template.
    pub fn validate_id(&self, id: &str) -> Result<()> {
        self.get(id).map(|_| ())
    }

    /// Every registered ID, sorted, deprecated ones included.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.templates.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Validate every stored entry, returning one error per invalid template.
    pub fn validate_all(&self) -> Vec<CatalogError> {
        self.ids()
            .into_iter()
            .filter_map(|id| self.validate_id(&id).err())
            .collect()
    }
}
