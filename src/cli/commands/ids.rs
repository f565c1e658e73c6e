//! Ids command implementation.
//!
//! The `scaffold-catalog ids` command prints every registered template ID,
//! deprecated ones included, one per line. Intended for scripts and shell
//! completion helpers.

use crate::cli::args::IdsArgs;
use crate::error::Result;
use crate::registry::Registry;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display;

/// The ids command implementation.
pub struct IdsCommand<'a> {
    registry: &'a Registry,
    args: IdsArgs,
}

impl<'a> IdsCommand<'a> {
    /// Create a new ids command.
    pub fn new(registry: &'a Registry, args: IdsArgs) -> Self {
        Self { registry, args }
    }
}

impl Command for IdsCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ids = self.registry.ids();

        if self.args.json {
            display::print_json(ui, &ids)?;
        } else {
            for id in &ids {
                ui.message(id);
            }
        }

        Ok(CommandResult::success())
    }
}
