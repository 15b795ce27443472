//! Where a generation writes: project root, main package, shared documents.

use std::path::{Path, PathBuf};

use crate::domain::{Name, error::DomainError};

pub const DEFAULT_MANIFEST: &str = "pyproject.toml";
pub const DEFAULT_COMPOSE: &str = "docker-compose.yml";

/// Resolved locations for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    project_dir: PathBuf,
    package_dir: PathBuf,
    manifest: String,
    compose: String,
}

impl ProjectLayout {
    pub fn new(project_dir: impl Into<PathBuf>, package_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            package_dir: package_dir.into(),
            manifest: DEFAULT_MANIFEST.into(),
            compose: DEFAULT_COMPOSE.into(),
        }
    }

    /// Override the shared document file names (relative to the project dir).
    pub fn with_documents(mut self, manifest: impl Into<String>, compose: impl Into<String>) -> Self {
        self.manifest = manifest.into();
        self.compose = compose.into();
        self
    }

    /// Redirect generation to a sibling app package next to the main one.
    ///
    /// `src/demo` with app `BillingApi` becomes `src/billing_api`.
    pub fn for_app(&self, app: &str) -> Result<Self, DomainError> {
        let app = Name::parse(app)?;
        let parent = self
            .package_dir
            .parent()
            .map_or_else(PathBuf::new, Path::to_path_buf);

        Ok(Self {
            package_dir: parent.join(app.snake()),
            ..self.clone()
        })
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn package_dir(&self) -> &Path {
        &self.package_dir
    }

    /// Last component of the project directory.
    pub fn project_name(&self) -> String {
        last_component(&self.project_dir)
    }

    /// Last component of the package directory; the importable package name.
    pub fn package_name(&self) -> String {
        last_component(&self.package_dir)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.project_dir.join(&self.manifest)
    }

    pub fn compose_path(&self) -> PathBuf {
        self.project_dir.join(&self.compose)
    }

    /// Path relative to the project root, for display.
    pub fn relative<'p>(&self, path: &'p Path) -> &'p Path {
        path.strip_prefix(&self.project_dir).unwrap_or(path)
    }
}

fn last_component(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ProjectLayout {
        ProjectLayout::new("/work/demo-service", "/work/demo-service/src/demo")
    }

    #[test]
    fn names_come_from_last_component() {
        let layout = layout();
        assert_eq!(layout.project_name(), "demo-service");
        assert_eq!(layout.package_name(), "demo");
    }

    #[test]
    fn trailing_separator_does_not_hide_name() {
        let layout = ProjectLayout::new("/work/demo/", "/work/demo/src/pkg/");
        assert_eq!(layout.project_name(), "demo");
        assert_eq!(layout.package_name(), "pkg");
    }

    #[test]
    fn documents_live_in_project_dir() {
        let layout = layout().with_documents("custom.toml", "compose.yaml");
        assert_eq!(layout.manifest_path(), PathBuf::from("/work/demo-service/custom.toml"));
        assert_eq!(layout.compose_path(), PathBuf::from("/work/demo-service/compose.yaml"));
    }

    #[test]
    fn app_redirects_to_sibling_package() {
        let app = layout().for_app("BillingApi").unwrap();
        assert_eq!(app.package_dir(), Path::new("/work/demo-service/src/billing_api"));
        assert_eq!(app.project_dir(), Path::new("/work/demo-service"));
    }

    #[test]
    fn empty_app_name_is_rejected() {
        assert_eq!(layout().for_app(""), Err(DomainError::EmptyIdentifier));
    }

    #[test]
    fn relative_strips_project_root() {
        let layout = layout();
        let path = layout.package_dir().join("tasks/__init__.py");
        assert_eq!(layout.relative(&path), Path::new("src/demo/tasks/__init__.py"));
    }
}
