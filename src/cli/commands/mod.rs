//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Every catalog command borrows the
//! [`Registry`](crate::registry::Registry) it reads from, so tests can run
//! commands against hand-built registries.

pub mod completions;
pub mod dispatcher;
pub mod display;
pub mod ids;
pub mod list;
pub mod show;
pub mod validate;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
