//! Scaffold Catalog - the template catalog behind a project-scaffolding CLI.
//!
//! The catalog answers which source templates exist, where they live, and
//! which ones satisfy a filter. A separate materialization step clones the
//! pinned revision of the chosen template; this crate only resolves it.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`registry`] - Template entity, registry and catalog operations
//! - [`ui`] - Terminal output, tables and theming
//!
//! # Example
//!
//! ```
//! use scaffold_catalog::registry::{get_template, list_active_templates};
//!
//! let ids: Vec<String> = list_active_templates().into_iter().map(|t| t.id).collect();
//! assert_eq!(ids, ["ccr", "main", "web-explorer"]);
//!
//! let ccr = get_template("ccr").unwrap();
//! assert_eq!(ccr.branch, "ccr-template");
//! ```

pub mod cli;
pub mod error;
pub mod registry;
pub mod ui;

pub use error::{CatalogError, Result, TemplateValidationError};
