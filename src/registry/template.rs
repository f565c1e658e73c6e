//! Template schema definitions.
//!
//! A template describes one scaffolding source: a repository, the branch to
//! resolve, and the commit that pins it for reproducible output.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::error::TemplateValidationError;

/// Number of commit characters shown in listings.
const SHORT_COMMIT_LEN: usize = 7;

/// A scaffolding template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Template {
    /// Unique key used by all lookups
    pub id: String,

    /// Human-readable display label
    pub name: String,

    /// Free-text summary
    pub description: String,

    /// Source repository location handed to the cloning step
    pub repo_url: String,

    /// Branch to resolve for cloning
    pub branch: String,

    /// Pinned revision
    pub commit: String,

    /// Programming-language affinity (empty means language-agnostic)
    pub language: String,

    /// Free-form labels for categorical filtering
    pub tags: BTreeSet<String>,

    /// Retired templates stay resolvable but are hidden from active views
    pub deprecated: bool,
}

impl Template {
    /// Create a language-agnostic, untagged template.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        repo_url: impl Into<String>,
        branch: impl Into<String>,
        commit: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            repo_url: repo_url.into(),
            branch: branch.into(),
            commit: commit.into(),
            language: String::new(),
            tags: BTreeSet::new(),
            deprecated: false,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the language affinity.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Replace the tag set. Duplicate tags collapse.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Mark the template as deprecated.
    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    /// Check the template's invariants.
    ///
    /// Fields are checked in order (ID, repository URL, commit) and the
    /// first empty one is reported.
    pub fn validate(&self) -> Result<(), TemplateValidationError> {
        if self.id.is_empty() {
            return Err(TemplateValidationError::MissingId);
        }
        if self.repo_url.is_empty() {
            return Err(TemplateValidationError::MissingRepoUrl);
        }
        if self.commit.is_empty() {
            return Err(TemplateValidationError::MissingCommit);
        }
        Ok(())
    }

    /// Check whether the template carries `tag` (exact match).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Whether the template matches any language filter.
    pub fn is_language_agnostic(&self) -> bool {
        self.language.is_empty()
    }

    /// Whether the template applies to `language`.
    pub fn matches_language(&self, language: &str) -> bool {
        self.is_language_agnostic() || self.language == language
    }

    /// Abbreviated commit for display.
    pub fn short_commit(&self) -> &str {
        match self.commit.char_indices().nth(SHORT_COMMIT_LEN) {
            Some((idx, _)) => &self.commit[..idx],
            None => &self.commit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Template {
        Template::new(
            "sample",
            "Sample",
            "https://example.com/sample.git",
            "main",
            "0123456789abcdef",
        )
    }

    #[test]
    fn new_template_defaults() {
        let template = sample();
        assert!(template.description.is_empty());
        assert!(template.is_language_agnostic());
        assert!(template.tags.is_empty());
        assert!(!template.deprecated);
    }

    #[test]
    fn valid_template_passes() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn missing_id_is_reported() {
        let mut template = sample();
        template.id.clear();
        assert_eq!(
            template.validate(),
            Err(TemplateValidationError::MissingId)
        );
    }

    #[test]
    fn missing_repo_url_is_reported() {
        let mut template = sample();
        template.repo_url.clear();
        assert_eq!(
            template.validate(),
            Err(TemplateValidationError::MissingRepoUrl)
        );
    }

    #[test]
    fn missing_commit_is_reported() {
        let mut template = sample();
        template.commit.clear();
        assert_eq!(
            template.validate(),
            Err(TemplateValidationError::MissingCommit)
        );
    }

    #[test]
    fn first_missing_field_wins() {
        let template = Template::new("", "Empty", "", "main", "");
        assert_eq!(
            template.validate(),
            Err(TemplateValidationError::MissingId)
        );
    }

    #[test]
    fn empty_branch_and_name_are_allowed() {
        let template = Template::new("x", "", "https://example.com/x.git", "", "abc");
        assert!(template.validate().is_ok());
    }

    #[test]
    fn has_tag_exact_match() {
        let template = sample().with_tags(["general", "default"]);
        assert!(template.has_tag("general"));
        assert!(template.has_tag("default"));
        assert!(!template.has_tag("General"));
        assert!(!template.has_tag("gen"));
    }

    #[test]
    fn has_tag_false_without_tags() {
        assert!(!sample().has_tag("general"));
        assert!(!sample().has_tag(""));
    }

    #[test]
    fn duplicate_tags_collapse() {
        let template = sample().with_tags(["web", "web", "explorer"]);
        assert_eq!(template.tags.len(), 2);
    }

    #[test]
    fn language_matching() {
        let agnostic = sample();
        assert!(agnostic.matches_language("rust"));
        assert!(agnostic.matches_language(""));

        let rust = sample().with_language("rust");
        assert!(rust.matches_language("rust"));
        assert!(!rust.matches_language("go"));
        assert!(!rust.matches_language(""));
    }

    #[test]
    fn short_commit_truncates() {
        assert_eq!(sample().short_commit(), "0123456");
    }

    #[test]
    fn short_commit_keeps_short_values() {
        let template = Template::new("x", "X", "url", "main", "abc");
        assert_eq!(template.short_commit(), "abc");
    }

    #[test]
    fn serializes_tags_as_sorted_array() {
        let template = sample().with_tags(["web", "explorer"]);
        let json = serde_json::to_value(&template).unwrap();
        assert_eq!(json["tags"], serde_json::json!(["explorer", "web"]));
        assert_eq!(json["repo_url"], "https://example.com/sample.git");
        assert_eq!(json["deprecated"], false);
    }
}
