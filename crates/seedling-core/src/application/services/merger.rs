//! Merging generated blocks into shared config documents.
//!
//! Both merges read the whole document, check a marker for containment and
//! rewrite the document with the block spliced after its anchor line. There
//! is no locking: two concurrent runs against the same project race on that
//! read-modify-write and one edit can be lost.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::{
    application::{ApplicationError, ports::Filesystem, services::FileWriter},
    domain::{DocumentKind, MergeOutcome, ScriptEntry, ServiceBlock, splice_after_anchor},
    error::SeedlingResult,
};

/// Splices script entries and service blocks into shared documents.
#[derive(Clone)]
pub struct ConfigMerger {
    filesystem: Arc<dyn Filesystem>,
    writer: FileWriter,
}

impl ConfigMerger {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self {
            writer: FileWriter::new(Arc::clone(&filesystem)),
            filesystem,
        }
    }

    /// Add `entry_line` under the manifest's scripts table.
    ///
    /// The manifest is never created here. A missing manifest or a manifest
    /// without the scripts header is a recoverable error and nothing is
    /// written.
    pub fn merge_script_entry(
        &self,
        document: &Path,
        entry_line: &str,
    ) -> SeedlingResult<MergeOutcome> {
        let entry = ScriptEntry::new(entry_line);
        self.merge(document, DocumentKind::Manifest, entry.marker(), entry.as_str())
    }

    /// Add a service definition under the compose document's `services:` key,
    /// bootstrapping the document from its skeleton if it does not exist.
    pub fn merge_service_block(
        &self,
        document: &Path,
        block_text: &str,
    ) -> SeedlingResult<MergeOutcome> {
        let block = ServiceBlock::parse(block_text)?;
        self.merge(document, DocumentKind::Services, block.name(), block.as_str())
    }

    fn merge(
        &self,
        document: &Path,
        kind: DocumentKind,
        marker: &str,
        block: &str,
    ) -> SeedlingResult<MergeOutcome> {
        let mut bootstrapped = false;

        if !self.filesystem.exists(document) {
            let Some(skeleton) = kind.skeleton() else {
                return Err(ApplicationError::ManifestMissing {
                    path: document.to_path_buf(),
                }
                .into());
            };
            self.writer.ensure_file(document, skeleton, false)?;
            debug!(path = %document.display(), "document bootstrapped from skeleton");
            bootstrapped = true;
        }

        let text = self.filesystem.read_to_string(document)?;
        if text.contains(marker) {
            debug!(path = %document.display(), marker, "block already present");
            return Ok(MergeOutcome::AlreadyPresent);
        }

        let merged = splice_after_anchor(&text, kind.anchor(), block).ok_or_else(|| {
            ApplicationError::AnchorMissing {
                path: document.to_path_buf(),
                anchor: kind.anchor(),
            }
        })?;

        self.filesystem.write_file(document, &merged)?;
        debug!(path = %document.display(), marker, "block merged");
        Ok(MergeOutcome::Merged { bootstrapped })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;
    use crate::domain::DomainError;
    use crate::error::SeedlingError;

    fn merger(mock: MockFilesystem) -> ConfigMerger {
        ConfigMerger::new(Arc::new(mock))
    }

    #[test]
    fn missing_manifest_is_recoverable_and_writes_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_write_file().never();
        fs.expect_read_to_string().never();

        let err = merger(fs)
            .merge_script_entry(Path::new("pyproject.toml"), "foo = \"bar\"")
            .unwrap_err();
        assert!(err.is_recoverable());
        assert!(matches!(
            err,
            SeedlingError::Application(ApplicationError::ManifestMissing { .. })
        ));
    }

    #[test]
    fn present_entry_is_not_rewritten() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_to_string()
            .returning(|_| Ok("[tool.poetry.scripts]\nfoo = \"bar\"\n".into()));
        fs.expect_write_file().never();

        let outcome = merger(fs)
            .merge_script_entry(Path::new("pyproject.toml"), "foo = \"bar\"")
            .unwrap();
        assert_eq!(outcome, MergeOutcome::AlreadyPresent);
    }

    #[test]
    fn entry_is_spliced_below_scripts_header() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_to_string()
            .returning(|_| Ok("[tool.poetry.scripts]\n\n[build-system]\n".into()));
        fs.expect_write_file()
            .withf(|_, content| content == "[tool.poetry.scripts]\nfoo = \"bar\"\n\n[build-system]\n")
            .times(1)
            .returning(|_, _| Ok(()));

        let outcome = merger(fs)
            .merge_script_entry(Path::new("pyproject.toml"), "foo = \"bar\"")
            .unwrap();
        assert_eq!(outcome, MergeOutcome::Merged { bootstrapped: false });
    }

    #[test]
    fn manifest_without_scripts_table_is_left_alone() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_to_string()
            .returning(|_| Ok("[tool.poetry]\nname = \"demo\"\n".into()));
        fs.expect_write_file().never();

        let err = merger(fs)
            .merge_script_entry(Path::new("pyproject.toml"), "foo = \"bar\"")
            .unwrap_err();
        assert!(matches!(
            err,
            SeedlingError::Application(ApplicationError::AnchorMissing { .. })
        ));
        assert!(err.is_recoverable());
    }

    #[test]
    fn existing_service_name_skips_merge() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_to_string()
            .returning(|_| Ok("services:\n  worker:\n    build: .\n".into()));
        fs.expect_write_file().never();

        let outcome = merger(fs)
            .merge_service_block(Path::new("docker-compose.yml"), "  worker:\n    image: w\n")
            .unwrap();
        assert_eq!(outcome, MergeOutcome::AlreadyPresent);
    }

    #[test]
    fn nameless_service_block_is_a_domain_error() {
        let fs = MockFilesystem::new();
        let err = merger(fs)
            .merge_service_block(Path::new("docker-compose.yml"), "\n")
            .unwrap_err();
        assert!(matches!(
            err,
            SeedlingError::Domain(DomainError::InvalidServiceBlock(_))
        ));
    }

    #[test]
    fn read_failure_is_hard_error() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_to_string().returning(|path| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Permission denied".into(),
            }
            .into())
        });

        let err = merger(fs)
            .merge_service_block(Path::new("docker-compose.yml"), "  web:\n")
            .unwrap_err();
        assert!(!err.is_recoverable());
    }
}
