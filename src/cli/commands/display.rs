//! Shared display helpers for template output.
//!
//! Used by `list`, `show` and `ids` so templates render the same way
//! everywhere.

use anyhow::Context;
use serde::Serialize;

use crate::error::Result;
use crate::registry::Template;
use crate::ui::{CatalogTheme, UserInterface};

/// Label shown for a template's language.
pub fn language_label(template: &Template) -> &str {
    if template.is_language_agnostic() {
        "any"
    } else {
        &template.language
    }
}

/// ID cell for tables, with a marker for deprecated templates.
pub fn id_label(template: &Template, theme: &CatalogTheme) -> String {
    if template.deprecated {
        format!(
            "{} {}",
            template.id,
            theme.deprecated.apply_to("(deprecated)")
        )
    } else {
        template.id.clone()
    }
}

/// Write `value` as pretty-printed JSON through the UI.
pub fn print_json<T: Serialize + ?Sized>(ui: &mut dyn UserInterface, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    ui.message(&json);
    Ok(())
}

/// Hint listing the known template IDs.
pub fn available_ids_hint(ids: &[String]) -> String {
    if ids.is_empty() {
        "No templates are registered".to_string()
    } else {
        format!("Available templates: {}", ids.join(", "))
    }
}
