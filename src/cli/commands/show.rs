//! Show command implementation.
//!
//! The `scaffold-catalog show` command prints everything the cloning step
//! needs for one template.

use crate::cli::args::ShowArgs;
use crate::error::{CatalogError, Result};
use crate::registry::{Registry, Template, DEFAULT_TEMPLATE_ID};
use crate::ui::{CatalogTheme, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::display;

/// The show command implementation.
pub struct ShowCommand<'a> {
    registry: &'a Registry,
    args: ShowArgs,
}

impl<'a> ShowCommand<'a> {
    /// Create a new show command.
    pub fn new(registry: &'a Registry, args: ShowArgs) -> Self {
        Self { registry, args }
    }

    /// The ID to resolve, falling back to the default template.
    pub fn requested_id(&self) -> &str {
        self.args.id.as_deref().unwrap_or(DEFAULT_TEMPLATE_ID)
    }

    fn render(&self, template: &Template, ui: &mut dyn UserInterface) {
        let theme = CatalogTheme::new();
        let field = |label: &str, value: &str| {
            format!("  {:<13}{}", theme.key.apply_to(format!("{}:", label)), value)
        };

        ui.show_header(&template.name);
        ui.message(&field("ID", &template.id));
        if !template.description.is_empty() {
            ui.message(&field("Description", &template.description));
        }
        ui.message(&field("Repository", &template.repo_url));
        ui.message(&field("Branch", &template.branch));
        ui.message(&field(
            "Commit",
            &theme.revision.apply_to(&template.commit).to_string(),
        ));
        ui.message(&field("Language", display::language_label(template)));
        ui.message(&field("Tags", &theme.format_tags(&template.tags)));

        if template.deprecated {
            ui.warning(&format!("Template '{}' is deprecated", template.id));
        }
    }
}

impl Command for ShowCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let id = self.requested_id();

        let template = match self.registry.get(id) {
            Ok(t) => t,
            Err(e @ CatalogError::NotFound { .. }) => {
                ui.error(&e.to_string());
                ui.show_hint(&display::available_ids_hint(&self.registry.ids()));
                return Ok(CommandResult::failure(1));
            }
            Err(e @ CatalogError::Invalid { .. }) => {
                tracing::warn!("Built-in data for '{}' is malformed: {}", id, e);
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        if self.args.json {
            display::print_json(ui, &template)?;
        } else {
            self.render(&template, ui);
        }

        Ok(CommandResult::success())
    }
}
