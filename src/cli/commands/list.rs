//! List command implementation.
//!
//! The `scaffold-catalog list` command lists templates, optionally filtered
//! by language or tag.

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::registry::{Registry, Template};
use crate::ui::{CatalogTheme, Table, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::display;

/// The list command implementation.
pub struct ListCommand<'a> {
    registry: &'a Registry,
    args: ListArgs,
}

impl<'a> ListCommand<'a> {
    /// Create a new list command.
    pub fn new(registry: &'a Registry, args: ListArgs) -> Self {
        Self { registry, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }

    /// Templates selected by the arguments, sorted by ID.
    pub fn select(&self) -> Vec<Template> {
        match (self.args.all, &self.args.language, &self.args.tag) {
            (false, None, None) => self.registry.list_active(),
            (false, Some(language), None) => self.registry.filter_by_language(language),
            (false, None, Some(tag)) => self.registry.filter_by_tag(tag),
            (false, Some(language), Some(tag)) => {
                let mut templates = self.registry.filter_by_language(language);
                templates.retain(|t| t.has_tag(tag));
                templates
            }
            (true, language, tag) => {
                let mut templates = self.registry.list();
                if let Some(language) = language {
                    templates.retain(|t| t.matches_language(language));
                }
                if let Some(tag) = tag {
                    templates.retain(|t| t.has_tag(tag));
                }
                templates
            }
        }
    }

    fn describe_filter(&self) -> String {
        let mut parts = Vec::new();
        if let Some(language) = &self.args.language {
            parts.push(format!("language '{}'", language));
        }
        if let Some(tag) = &self.args.tag {
            parts.push(format!("tag '{}'", tag));
        }
        parts.join(" and ")
    }
}

impl Command for ListCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let templates = self.select();
        tracing::debug!("Listing {} templates", templates.len());

        if self.args.json {
            display::print_json(ui, &templates)?;
            return Ok(CommandResult::success());
        }

        if templates.is_empty() {
            let filter = self.describe_filter();
            if filter.is_empty() {
                ui.warning("No templates available");
            } else {
                ui.warning(&format!("No templates match {}", filter));
            }
            return Ok(CommandResult::success());
        }

        let theme = CatalogTheme::new();
        let verbose = ui.output_mode().shows_details();

        let mut headers = vec!["ID", "Name", "Branch", "Commit", "Tags"];
        if verbose {
            headers.extend(["Language", "Repository"]);
        }

        let mut table = Table::new(headers);
        for template in &templates {
            let mut row = vec![
                display::id_label(template, &theme),
                template.name.clone(),
                template.branch.clone(),
                theme.revision.apply_to(template.short_commit()).to_string(),
                theme.format_tags(&template.tags),
            ];
            if verbose {
                row.push(display::language_label(template).to_string());
                row.push(template.repo_url.clone());
            }
            table.add_row(row);
        }

        ui.show_header("Templates");
        ui.message(&table.render());
        ui.show_hint("Run 'scaffold-catalog show <id>' for details");

        Ok(CommandResult::success())
    }
}
