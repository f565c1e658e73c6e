//! Catalog operations over the built-in registry.
//!
//! These are thin wrappers around [`Registry`](super::Registry) methods bound
//! to the process-wide built-in table, which is never exposed mutably.

use crate::error::Result;
use crate::registry::builtin::{self, DEFAULT_TEMPLATE_ID};
use crate::registry::template::Template;

/// Retrieve a template by ID.
pub fn get_template(id: &str) -> Result<Template> {
    builtin::registry().get(id)
}

/// Retrieve the default template.
pub fn get_default_template() -> Result<Template> {
    get_template(DEFAULT_TEMPLATE_ID)
}

/// All templates, sorted by ID.
pub fn list_templates() -> Vec<Template> {
    builtin::registry().list()
}

/// All non-deprecated templates, sorted by ID.
pub fn list_active_templates() -> Vec<Template> {
    builtin::registry().list_active()
}

/// Active templates for `language`, including language-agnostic ones.
pub fn filter_templates_by_language(language: &str) -> Vec<Template> {
    builtin::registry().filter_by_language(language)
}

/// Active templates carrying `tag`.
pub fn filter_templates_by_tag(tag: &str) -> Vec<Template> {
    builtin::registry().filter_by_tag(tag)
}

/// Check that a template ID exists and is valid.
pub fn validate_template_id(id: &str) -> Result<()> {
    builtin::registry().validate_id(id)
}

/// Every template ID, sorted, deprecated ones included.
pub fn get_template_ids() -> Vec<String> {
    builtin::registry().ids()
}
