//! Project discovery on the local filesystem.
//!
//! A project root is the nearest directory (walking up from a start point)
//! that holds one of [`PROJECT_MARKERS`]. Its main package lives at
//! `<project>/src/<name>`, where `<name>` is the first entry of
//! `[tool.coverage.run] source` in the project manifest.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, instrument};

use seedling_core::{
    application::ApplicationError,
    domain::{ProjectLayout, layout::DEFAULT_MANIFEST},
    error::SeedlingResult,
};

/// Files whose presence marks a directory as a project root.
pub const PROJECT_MARKERS: [&str; 2] = ["pyproject.toml", "requirements.txt"];

// Only the keys we read; everything else in the manifest is ignored.
#[derive(Debug, Default, Deserialize)]
struct Manifest {
    #[serde(default)]
    tool: Tool,
}

#[derive(Debug, Default, Deserialize)]
struct Tool {
    #[serde(default)]
    coverage: Coverage,
}

#[derive(Debug, Default, Deserialize)]
struct Coverage {
    #[serde(default)]
    run: CoverageRun,
}

#[derive(Debug, Default, Deserialize)]
struct CoverageRun {
    #[serde(default)]
    source: Vec<String>,
}

/// Resolves [`ProjectLayout`]s from explicit paths or by discovery.
#[derive(Debug, Clone)]
pub struct ProjectLocator {
    manifest: String,
    compose: Option<String>,
}

impl Default for ProjectLocator {
    fn default() -> Self {
        Self {
            manifest: DEFAULT_MANIFEST.into(),
            compose: None,
        }
    }
}

impl ProjectLocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use non-default document names for the resulting layouts.
    pub fn with_documents(manifest: impl Into<String>, compose: impl Into<String>) -> Self {
        Self {
            manifest: manifest.into(),
            compose: Some(compose.into()),
        }
    }

    /// Walk up from `start` to the first directory holding a project marker.
    #[instrument(skip(self), fields(start = %start.display()))]
    pub fn find_project_dir(&self, start: &Path) -> SeedlingResult<PathBuf> {
        start
            .ancestors()
            .find(|dir| {
                std::iter::once(self.manifest.as_str())
                    .chain(PROJECT_MARKERS)
                    .any(|marker| dir.join(marker).is_file())
            })
            .map(Path::to_path_buf)
            .inspect(|dir| debug!(project = %dir.display(), "project root found"))
            .ok_or_else(|| {
                ApplicationError::ProjectNotFound {
                    start: start.to_path_buf(),
                }
                .into()
            })
    }

    /// Resolve the main package directory of `project_dir`.
    #[instrument(skip(self), fields(project = %project_dir.display()))]
    pub fn find_package_dir(&self, project_dir: &Path) -> SeedlingResult<PathBuf> {
        let not_found = |reason: String| ApplicationError::PackageNotFound {
            project: project_dir.to_path_buf(),
            reason,
        };

        let manifest_path = project_dir.join(&self.manifest);
        let raw = fs::read_to_string(&manifest_path).map_err(|e| {
            not_found(format!("failed to read '{}': {e}", manifest_path.display()))
        })?;
        let manifest: Manifest = toml::from_str(&raw).map_err(|e| {
            not_found(format!("failed to parse '{}': {e}", manifest_path.display()))
        })?;

        let name = manifest
            .tool
            .coverage
            .run
            .source
            .into_iter()
            .next()
            .ok_or_else(|| not_found("[tool.coverage.run] source is empty or missing".into()))?;

        let package_dir = project_dir.join("src").join(&name);
        if !package_dir.is_dir() {
            return Err(not_found(format!("'{}' does not exist", package_dir.display())).into());
        }
        debug!(package = %package_dir.display(), "package found");
        Ok(package_dir)
    }

    /// Build a layout, discovering whatever was not given explicitly.
    ///
    /// With no `project_dir` the walk starts at `start`; with no
    /// `package_dir` it is read from the manifest.
    pub fn locate(
        &self,
        start: &Path,
        project_dir: Option<&Path>,
        package_dir: Option<&Path>,
    ) -> SeedlingResult<ProjectLayout> {
        let project_dir = match project_dir {
            Some(dir) => dir.to_path_buf(),
            None => self.find_project_dir(start)?,
        };
        let package_dir = match package_dir {
            Some(dir) => dir.to_path_buf(),
            None => self.find_package_dir(&project_dir)?,
        };

        let layout = ProjectLayout::new(project_dir, package_dir);
        Ok(match &self.compose {
            Some(compose) => layout.with_documents(self.manifest.clone(), compose.clone()),
            None => layout,
        })
    }
}
