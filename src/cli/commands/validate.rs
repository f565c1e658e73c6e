//! Validate command implementation.
//!
//! The `scaffold-catalog validate` command checks one template ID, or every
//! registered template when no ID is given. Argument parsers for other tools
//! can shell out to it to check an ID before cloning.

use crate::cli::args::ValidateArgs;
use crate::error::{CatalogError, Result};
use crate::registry::Registry;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display;

/// The validate command implementation.
pub struct ValidateCommand<'a> {
    registry: &'a Registry,
    args: ValidateArgs,
}

impl<'a> ValidateCommand<'a> {
    /// Create a new validate command.
    pub fn new(registry: &'a Registry, args: ValidateArgs) -> Self {
        Self { registry, args }
    }

    fn validate_one(&self, id: &str, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match self.registry.validate_id(id) {
            Ok(()) => {
                ui.success(&format!("Template '{}' is valid", id));
                Ok(CommandResult::success())
            }
            Err(e @ CatalogError::NotFound { .. }) => {
                ui.error(&e.to_string());
                ui.show_hint(&display::available_ids_hint(&self.registry.ids()));
                Ok(CommandResult::failure(1))
            }
            Err(e @ CatalogError::Invalid { .. }) => {
                ui.error(&e.to_string());
                Ok(CommandResult::failure(1))
            }
            Err(e) => Err(e),
        }
    }

    fn validate_all(&self, ui: &mut dyn UserInterface) -> CommandResult {
        let errors = self.registry.validate_all();

        if errors.is_empty() {
            let count = self.registry.len();
            let label = if count == 1 { "template" } else { "templates" };
            ui.success(&format!("All {} {} are valid", count, label));
            return CommandResult::success();
        }

        for error in &errors {
            ui.error(&error.to_string());
        }
        CommandResult::failure(1)
    }
}

impl Command for ValidateCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &self.args.id {
            Some(id) => self.validate_one(id, ui),
            None => Ok(self.validate_all(ui)),
        }
    }
}
