//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::process::ExitCode;

use crate::cli::args::{Cli, Commands, ListArgs};
use crate::error::Result;
use crate::registry::{builtin, Registry};
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: u8,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: u8) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

impl From<CommandResult> for ExitCode {
    fn from(result: CommandResult) -> Self {
        ExitCode::from(result.exit_code)
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher<'a> {
    registry: &'a Registry,
}

impl CommandDispatcher<'static> {
    /// Create a dispatcher backed by the built-in catalog.
    pub fn new() -> Self {
        Self {
            registry: builtin::registry(),
        }
    }
}

impl Default for CommandDispatcher<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandDispatcher<'a> {
    /// Create a dispatcher backed by an explicit registry.
    pub fn with_registry(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Get the registry commands read from.
    pub fn registry(&self) -> &Registry {
        self.registry
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        tracing::debug!("Dispatching {:?}", cli.command);

        match &cli.command {
            Some(Commands::List(args)) => {
                let cmd = super::list::ListCommand::new(self.registry, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Show(args)) => {
                let cmd = super::show::ShowCommand::new(self.registry, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Ids(args)) => {
                let cmd = super::ids::IdsCommand::new(self.registry, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Validate(args)) => {
                let cmd = super::validate::ValidateCommand::new(self.registry, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                // Default to listing active templates
                let cmd = super::list::ListCommand::new(self.registry, ListArgs::default());
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Template;
    use crate::ui::MockUI;
    use clap::Parser;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn command_result_keeps_high_exit_codes() {
        let result = CommandResult::failure(255);
        assert_eq!(result.exit_code, 255);
        assert_eq!(ExitCode::from(result), ExitCode::from(255));
    }

    #[test]
    fn command_result_converts_to_exit_code() {
        assert_eq!(ExitCode::from(CommandResult::success()), ExitCode::SUCCESS);
        assert_eq!(ExitCode::from(CommandResult::failure(1)), ExitCode::FAILURE);
    }

    #[test]
    fn dispatcher_uses_builtin_catalog() {
        let dispatcher = CommandDispatcher::new();
        assert_eq!(dispatcher.registry().ids(), vec!["ccr", "main", "web-explorer"]);
    }

    #[test]
    fn no_subcommand_lists_templates() {
        let cli = Cli::parse_from(["scaffold-catalog"]);
        let mut ui = MockUI::new();

        let result = CommandDispatcher::new().dispatch(&cli, &mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("web-explorer"));
    }

    #[test]
    fn dispatch_routes_to_custom_registry() {
        let registry = Registry::from_templates([Template::new(
            "custom",
            "Custom",
            "https://example.com/custom.git",
            "main",
            "abc1234",
        )]);
        let cli = Cli::parse_from(["scaffold-catalog", "ids"]);
        let mut ui = MockUI::new();

        let result = CommandDispatcher::with_registry(&registry)
            .dispatch(&cli, &mut ui)
            .unwrap();

        assert!(result.success);
        assert_eq!(ui.messages(), &["custom".to_string()]);
    }
}
