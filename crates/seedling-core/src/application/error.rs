//! Application layer errors.
//!
//! These errors represent failures in orchestration, not text logic.
//! Text logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while writing or merging into a project tree.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed (permissions, invalid path, disk full).
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The build manifest a script entry targets does not exist.
    #[error("Manifest not found at {path}; cannot add script entry")]
    ManifestMissing { path: PathBuf },

    /// The document exists but lacks the anchor line blocks are spliced after.
    #[error("Anchor '{anchor}' not found in {path}")]
    AnchorMissing { path: PathBuf, anchor: &'static str },

    /// No project root was found walking up from the start directory.
    #[error("No project found from {start}")]
    ProjectNotFound { start: PathBuf },

    /// The project root was found but its main package could not be resolved.
    #[error("Package directory not found in {project}: {reason}")]
    PackageNotFound { project: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::ManifestMissing { path } => vec![
                format!("Expected a build manifest at {}", path.display()),
                "Bootstrap the project first (e.g. poetry init)".into(),
            ],
            Self::AnchorMissing { path, anchor } => vec![
                format!("Add a '{}' line to {}", anchor, path.display()),
                "The entry is inserted directly below that line".into(),
            ],
            Self::ProjectNotFound { .. } => vec![
                "Run from inside a project containing pyproject.toml or requirements.txt".into(),
                "Or pass --project-dir explicitly".into(),
            ],
            Self::PackageNotFound { .. } => vec![
                "Set [tool.coverage.run] source = [\"<package>\"] in pyproject.toml".into(),
                "Or pass --package-dir explicitly".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::ManifestMissing { .. } | Self::ProjectNotFound { .. } => ErrorCategory::NotFound,
            Self::PackageNotFound { .. } => ErrorCategory::NotFound,
            Self::AnchorMissing { .. } => ErrorCategory::Validation,
        }
    }

    /// A precondition failure that left the tree untouched. The run may
    /// continue; a strict caller may choose to halt.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::ManifestMissing { .. } | Self::AnchorMissing { .. }
        )
    }
}
