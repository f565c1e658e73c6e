//! Built-in templates compiled into the binary.

use crate::registry::resolver::Registry;
use crate::registry::template::Template;
use std::sync::LazyLock;

/// ID of the template used when none is requested.
pub const DEFAULT_TEMPLATE_ID: &str = "main";

/// Repository hosting every built-in template branch.
pub const DEFAULT_REPO_URL: &str =
    "https://github.com/Fomo-Driven-Development/strategic-claude-base.git";

// --- Process-wide registry (one-time via LazyLock) ---

static BUILTIN_REGISTRY: LazyLock<Registry> =
    LazyLock::new(|| Registry::from_templates(builtin_templates()));

/// The registry of built-in templates.
pub fn registry() -> &'static Registry {
    &BUILTIN_REGISTRY
}

/// The literal built-in data set.
pub fn builtin_templates() -> Vec<Template> {
    vec![
        Template::new(
            "main",
            "Strategic Claude Basic",
            DEFAULT_REPO_URL,
            "main",
            "0c3747dd81c69bad66c828175e358fa840e88227",
        )
        .with_description(
            "Main template for general development projects with comprehensive Claude Code integration",
        )
        .with_tags(["general", "default"]),
        Template::new(
            "ccr",
            "CCR Template",
            DEFAULT_REPO_URL,
            "ccr-template",
            "2c9fa88312f7ae68747dd69bbc0075ab47b0225f",
        )
        .with_description(
            "Specialized template for CCR (Claude Code Router) workflows and development patterns",
        )
        .with_tags(["ccr", "workflow", "specialized"]),
        Template::new(
            "web-explorer",
            "Claude Web Explorer Template",
            DEFAULT_REPO_URL,
            "web-explorer",
            "1a91789daf511b8663e879c9e7e1f36755dfa2d6",
        )
        .with_description(
            "A template for browser automation projects using Chromium with MCP (Model Context Protocol) integration for Claude Code",
        )
        .with_tags(["web", "explorer"]),
    ]
}
