//! Infrastructure adapters for Seedling.
//!
//! This crate implements the ports defined in `seedling-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod project_locator;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use project_locator::{PROJECT_MARKERS, ProjectLocator};
