//! Idempotent directory and file creation.
//!
//! Re-running a generation against a partially generated tree converges on
//! the same result because every write here is skip-if-exists unless the
//! caller explicitly asks for an overwrite.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{DirOutcome, FileOutcome},
    error::SeedlingResult,
};

/// Creates directories and files exactly once.
#[derive(Clone)]
pub struct FileWriter {
    filesystem: Arc<dyn Filesystem>,
}

impl FileWriter {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Create `path` and any missing ancestors.
    ///
    /// An existing directory is reported as [`DirOutcome::AlreadyExisted`]
    /// and left untouched. An existing *file* at `path` is an error, since
    /// nothing could later be written beneath it.
    pub fn ensure_directory(&self, path: &Path) -> SeedlingResult<DirOutcome> {
        if self.filesystem.is_dir(path) {
            debug!(path = %path.display(), "directory already exists");
            return Ok(DirOutcome::AlreadyExisted);
        }
        if self.filesystem.exists(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "path exists and is not a directory".into(),
            }
            .into());
        }

        self.filesystem.create_dir_all(path)?;
        debug!(path = %path.display(), "directory created");
        Ok(DirOutcome::Created)
    }

    /// Write `content` to `path` unless the file already exists.
    ///
    /// With `overwrite`, an existing file is deleted first and rewritten.
    /// Parent directories are never created here; call
    /// [`ensure_directory`](Self::ensure_directory) first.
    pub fn ensure_file(
        &self,
        path: &Path,
        content: &str,
        overwrite: bool,
    ) -> SeedlingResult<FileOutcome> {
        let mut exists = self.filesystem.exists(path);
        let mut removed = false;

        if overwrite && exists {
            self.filesystem.remove_file(path)?;
            debug!(path = %path.display(), "file removed for overwrite");
            exists = false;
            removed = true;
        }

        if exists {
            debug!(path = %path.display(), "file already exists, skipped");
            return Ok(FileOutcome::SkippedExisting);
        }

        self.filesystem.write_file(path, content)?;
        debug!(path = %path.display(), bytes = content.len(), "file written");

        Ok(if removed {
            FileOutcome::RemovedThenCreated
        } else {
            FileOutcome::Created
        })
    }

    /// Mark a generated script executable (no-op where unsupported).
    pub fn ensure_executable(&self, path: &Path) -> SeedlingResult<()> {
        self.filesystem.set_permissions(path, true)
    }
}
