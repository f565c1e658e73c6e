//! Template registry.
//!
//! The registry is a fixed, compiled-in table of scaffolding templates. It is
//! built once on first use and never mutated afterwards, so it can be read
//! from any number of threads without locking.
//!
//! # Example
//!
//! ```
//! use scaffold_catalog::registry::{filter_templates_by_tag, get_default_template};
//!
//! let template = get_default_template().unwrap();
//! assert_eq!(template.id, "main");
//!
//! let general = filter_templates_by_tag("general");
//! assert_eq!(general.len(), 1);
//! ```

pub mod builtin;
pub mod catalog;
pub mod resolver;
pub mod template;

// Re-exports
pub use builtin::{DEFAULT_REPO_URL, DEFAULT_TEMPLATE_ID};
pub use catalog::{
    filter_templates_by_language, filter_templates_by_tag, get_default_template, get_template,
    get_template_ids, list_active_templates, list_templates, validate_template_id,
};
pub use resolver::Registry;
pub use template::Template;
