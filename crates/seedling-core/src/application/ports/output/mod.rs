//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `seedling-adapters` crate provides implementations.

use crate::error::SeedlingResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `seedling_adapters::filesystem::LocalFilesystem` (production)
/// - `seedling_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Every call is blocking and completes before the next one starts
/// - `write_file` is all-or-nothing: readers see the old content or the new
///   content, never a prefix
/// - No call creates parent directories implicitly except `create_dir_all`
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SeedlingResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> SeedlingResult<()>;

    /// Read a whole file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> SeedlingResult<String>;

    /// Delete a single file.
    fn remove_file(&self, path: &Path) -> SeedlingResult<()>;

    /// Set file permissions.
    fn set_permissions(&self, path: &Path, executable: bool) -> SeedlingResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}
