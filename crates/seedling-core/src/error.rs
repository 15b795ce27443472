//! Unified error handling for Seedling Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Seedling Core operations.
#[derive(Debug, Error, Clone)]
pub enum SeedlingError {
    /// Errors from the domain layer (invalid names, blocks).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (filesystem, missing documents).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl SeedlingError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in Seedling".into(),
                "Please report this issue at: https://github.com/cosecruz/seedling/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Check if the run can continue past this error.
    ///
    /// Recoverable errors are precondition failures that performed no
    /// mutation; everything else (filesystem faults above all) must abort.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Application(e) if e.is_recoverable())
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type SeedlingResult<T> = Result<T, SeedlingError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn manifest_missing_is_recoverable() {
        let err: SeedlingError = ApplicationError::ManifestMissing {
            path: PathBuf::from("pyproject.toml"),
        }
        .into();
        assert!(err.is_recoverable());
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn filesystem_fault_is_not_recoverable() {
        let err: SeedlingError = ApplicationError::FilesystemError {
            path: PathBuf::from("/root/x"),
            reason: "Permission denied".into(),
        }
        .into();
        assert!(!err.is_recoverable());
        assert_eq!(err.category(), ErrorCategory::Internal);
    }

    #[test]
    fn domain_errors_carry_suggestions() {
        let err = SeedlingError::from(DomainError::EmptyIdentifier);
        assert!(!err.suggestions().is_empty());
        assert_eq!(err.category(), ErrorCategory::Validation);
    }
}
