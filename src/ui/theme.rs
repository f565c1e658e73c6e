//! Visual theme and styling.

use console::Style;

/// The catalog's visual theme.
#[derive(Debug, Clone)]
pub struct CatalogTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (magenta bold).
    pub header: Style,
    /// Style for commit hashes and URLs (dim italic).
    pub revision: Style,
    /// Style for contextual hints (magenta dim).
    pub hint: Style,
    /// Style for key labels in key-value displays (bold).
    pub key: Style,
    /// Style for tags (cyan).
    pub tag: Style,
    /// Style for deprecated markers (orange).
    pub deprecated: Style,
}

impl Default for CatalogTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            highlight: Style::new().bold(),
            header: Style::new().bold().magenta(),
            revision: Style::new().dim().italic(),
            hint: Style::new().magenta().dim(),
            key: Style::new().bold(),
            tag: Style::new().cyan(),
            deprecated: Style::new().color256(208),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            revision: Style::new(),
            hint: Style::new(),
            key: Style::new(),
            tag: Style::new(),
            deprecated: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("◆"),
            self.highlight.apply_to(title)
        )
    }

    /// Format a hint line.
    pub fn format_hint(&self, hint: &str) -> String {
        format!("  {}", self.hint.apply_to(hint))
    }

    /// Format a tag list as `#a #b`.
    pub fn format_tags<'a>(&self, tags: impl IntoIterator<Item = &'a String>) -> String {
        tags.into_iter()
            .map(|t| format!("{}", self.tag.apply_to(format!("#{}", t))))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
