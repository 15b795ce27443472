//! Local filesystem adapter using std::fs.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use seedling_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{SeedlingError, SeedlingResult},
};

/// Production filesystem implementation using `std::fs`.
///
/// `write_file` goes through a temporary file in the target's directory and
/// a rename, so an interrupted write never leaves a truncated document.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> SeedlingResult<()> {
        fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> SeedlingResult<()> {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));

        let mut staged = NamedTempFile::new_in(dir)
            .map_err(|e| map_io_error(path, e, "create temporary file"))?;
        staged
            .write_all(content.as_bytes())
            .and_then(|()| staged.as_file().sync_all())
            .map_err(|e| map_io_error(path, e, "write file"))?;

        // Temp files are created 0600; keep the replaced file's mode or fall
        // back to a regular file mode.
        let permissions = match fs::metadata(path) {
            Ok(metadata) => Some(metadata.permissions()),
            Err(_) => default_permissions(),
        };
        if let Some(permissions) = permissions {
            staged
                .as_file()
                .set_permissions(permissions)
                .map_err(|e| map_io_error(path, e, "set permissions"))?;
        }

        staged
            .persist(path)
            .map_err(|e| map_io_error(path, e.error, "replace file"))?;
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> SeedlingResult<String> {
        fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn remove_file(&self, path: &Path) -> SeedlingResult<()> {
        fs::remove_file(path).map_err(|e| map_io_error(path, e, "remove file"))
    }

    fn set_permissions(&self, path: &Path, executable: bool) -> SeedlingResult<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if executable {
                let metadata =
                    fs::metadata(path).map_err(|e| map_io_error(path, e, "get metadata"))?;
                let mut perms = metadata.permissions();
                let mode = perms.mode();
                perms.set_mode(mode | 0o111);
                fs::set_permissions(path, perms)
                    .map_err(|e| map_io_error(path, e, "set permissions"))?;
            }
        }
        #[cfg(windows)]
        {
            // Windows doesn't have executable bit in the same way
            let _ = (path, executable);
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<fs::Permissions> {
    None
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> SeedlingError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_replaces_content_whole() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("a.txt");
        let fs_ = LocalFilesystem::new();

        fs_.write_file(&file, "first version").unwrap();
        fs_.write_file(&file, "B").unwrap();
        assert_eq!(fs_.read_to_string(&file).unwrap(), "B");
    }

    #[test]
    fn write_leaves_no_staging_files_behind() {
        let temp = TempDir::new().unwrap();
        let fs_ = LocalFilesystem::new();
        fs_.write_file(&temp.path().join("a.txt"), "x").unwrap();

        let entries: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let err = LocalFilesystem::new()
            .write_file(&temp.path().join("missing/a.txt"), "x")
            .unwrap_err();
        assert!(!err.is_recoverable());
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn is_dir_distinguishes_files() {
        let temp = TempDir::new().unwrap();
        let fs_ = LocalFilesystem::new();
        let file = temp.path().join("f");
        fs_.write_file(&file, "").unwrap();

        assert!(fs_.is_dir(temp.path()));
        assert!(!fs_.is_dir(&file));
        assert!(fs_.exists(&file));
    }

    #[test]
    fn remove_then_exists_is_false() {
        let temp = TempDir::new().unwrap();
        let fs_ = LocalFilesystem::new();
        let file = temp.path().join("f");
        fs_.write_file(&file, "").unwrap();
        fs_.remove_file(&file).unwrap();
        assert!(!fs_.exists(&file));
    }

    #[cfg(unix)]
    #[test]
    fn executable_bit_is_added_and_preserved_on_rewrite() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let fs_ = LocalFilesystem::new();
        let script = temp.path().join("run.sh");
        fs_.write_file(&script, "echo hi").unwrap();
        fs_.set_permissions(&script, true).unwrap();
        fs_.write_file(&script, "echo bye").unwrap();

        let mode = fs::metadata(&script).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }
}
