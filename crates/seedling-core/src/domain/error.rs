// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports keep a copy)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Identifier is empty; nothing to derive a name from")]
    EmptyIdentifier,

    #[error("Invalid service block: {0}")]
    InvalidServiceBlock(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyIdentifier => vec![
                "Pass a non-empty name, e.g. HelloWorld or hello_world".into(),
            ],
            Self::InvalidServiceBlock(msg) => vec![
                format!("Details: {}", msg),
                "Start the block with the service name, e.g. '  worker:'".into(),
            ],
        }
    }
}
