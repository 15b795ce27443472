//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use seedling_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{SeedlingError, SeedlingResult},
};

/// In-memory filesystem for testing.
///
/// Clones share the same tree, so a test can hand one clone to a service and
/// inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    executables: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Check if a file is marked executable.
    pub fn is_executable(&self, path: &Path) -> bool {
        self.inner
            .read()
            .is_ok_and(|inner| inner.executables.contains(path))
    }

    /// Every directory and file with its content, sorted by path.
    ///
    /// Two snapshots compare equal when the trees are identical.
    pub fn snapshot(&self) -> Vec<(PathBuf, Option<String>)> {
        let Ok(inner) = self.inner.read() else {
            return Vec::new();
        };
        let mut entries: Vec<_> = inner
            .directories
            .iter()
            .map(|d| (d.clone(), None))
            .chain(inner.files.iter().map(|(p, c)| (p.clone(), Some(c.clone()))))
            .collect();
        entries.sort();
        entries
    }

    fn read(&self) -> SeedlingResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner.read().map_err(|_| poisoned())
    }

    fn write(&self) -> SeedlingResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner.write().map_err(|_| poisoned())
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> SeedlingResult<()> {
        let mut inner = self.write()?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if inner.files.contains_key(&current) {
                return Err(not_a_directory(&current));
            }
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> SeedlingResult<()> {
        let mut inner = self.write()?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }
        if inner.directories.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Is a directory".into(),
            }
            .into());
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> SeedlingResult<String> {
        self.read()?.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "No such file".into(),
            }
            .into()
        })
    }

    fn remove_file(&self, path: &Path) -> SeedlingResult<()> {
        let mut inner = self.write()?;
        if inner.files.remove(path).is_none() {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "No such file".into(),
            }
            .into());
        }
        inner.executables.remove(path);
        Ok(())
    }

    fn set_permissions(&self, path: &Path, executable: bool) -> SeedlingResult<()> {
        let mut inner = self.write()?;

        if executable {
            inner.executables.insert(path.to_path_buf());
        } else {
            inner.executables.remove(path);
        }

        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner.read().is_ok_and(|inner| {
            inner.files.contains_key(path) || inner.directories.contains(path)
        })
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .is_ok_and(|inner| inner.directories.contains(path))
    }
}

fn poisoned() -> SeedlingError {
    SeedlingError::Internal {
        message: "memory filesystem lock poisoned".into(),
    }
}

fn not_a_directory(path: &Path) -> SeedlingError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: "Not a directory".into(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_registers_ancestors() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/p/src/pkg")).unwrap();
        assert!(fs.is_dir(Path::new("/p")));
        assert!(fs.is_dir(Path::new("/p/src")));
        assert!(fs.is_dir(Path::new("/p/src/pkg")));
    }

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/nope/a.txt"), "x").is_err());
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let other = fs.clone();
        fs.create_dir_all(Path::new("/p")).unwrap();
        fs.write_file(Path::new("/p/a"), "x").unwrap();
        assert_eq!(other.read_file(Path::new("/p/a")).as_deref(), Some("x"));
    }

    #[test]
    fn directory_under_file_is_rejected() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/p")).unwrap();
        fs.write_file(Path::new("/p/app"), "").unwrap();
        assert!(fs.create_dir_all(Path::new("/p/app/cmd")).is_err());
    }

    #[test]
    fn removing_missing_file_errors() {
        let fs = MemoryFilesystem::new();
        assert!(fs.remove_file(Path::new("/x")).is_err());
    }

    #[test]
    fn read_missing_file_errors() {
        let fs = MemoryFilesystem::new();
        assert!(fs.read_to_string(Path::new("/x")).is_err());
    }
}
