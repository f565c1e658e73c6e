//! Error types for catalog operations.
//!
//! This module defines [`CatalogError`], the primary error type used throughout
//! the crate, [`TemplateValidationError`] for a template's own invariant
//! checks, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Lookups return `CatalogError` with the requested ID embedded
//! - The catalog never prints or exits; commands decide how to present errors
//! - Use `anyhow::Error` (via `CatalogError::Other`) for unexpected CLI errors

use thiserror::Error;

/// Core error type for catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Requested template ID has no entry in the registry.
    #[error("template '{id}' not found")]
    NotFound { id: String },

    /// A registry entry exists but fails its own invariants.
    #[error("template '{id}' is invalid: {source}")]
    Invalid {
        id: String,
        #[source]
        source: TemplateValidationError,
    },

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CatalogError {
    /// The template ID this error refers to, if any.
    pub fn template_id(&self) -> Option<&str> {
        match self {
            Self::NotFound { id } | Self::Invalid { id, .. } => Some(id.as_str()),
            Self::Other(_) => None,
        }
    }
}

/// A template field that violates an invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TemplateValidationError {
    /// The template ID is empty.
    #[error("template ID is required")]
    MissingId,

    /// The repository URL is empty.
    #[error("repository URL is required")]
    MissingRepoUrl,

    /// The pinned commit is empty.
    #[error("commit is required (templates must be pinned to a revision)")]
    MissingCommit,
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_displays_id() {
        let err = CatalogError::NotFound {
            id: "nonexistent".into(),
        };
        assert_eq!(err.to_string(), "template 'nonexistent' not found");
    }

    #[test]
    fn invalid_displays_id_and_field() {
        let err = CatalogError::Invalid {
            id: "broken".into(),
            source: TemplateValidationError::MissingCommit,
        };
        let msg = err.to_string();
        assert!(msg.contains("broken"));
        assert!(msg.contains("commit is required"));
    }

    #[test]
    fn invalid_exposes_source() {
        use std::error::Error as _;

        let err = CatalogError::Invalid {
            id: "broken".into(),
            source: TemplateValidationError::MissingRepoUrl,
        };
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "repository URL is required");
    }

    #[test]
    fn template_id_for_lookup_errors() {
        let not_found = CatalogError::NotFound { id: "x".into() };
        assert_eq!(not_found.template_id(), Some("x"));

        let invalid = CatalogError::Invalid {
            id: "y".into(),
            source: TemplateValidationError::MissingId,
        };
        assert_eq!(invalid.template_id(), Some("y"));
    }

    #[test]
    fn anyhow_error_converts() {
        let anyhow_err = anyhow::anyhow!("something went wrong");
        let err: CatalogError = anyhow_err.into();
        assert!(matches!(err, CatalogError::Other(_)));
        assert!(err.to_string().contains("something went wrong"));
        assert_eq!(err.template_id(), None);
    }
}
