//! The handle generators write through.
//!
//! Wraps the writer and merger, records every outcome into a
//! [`GenerationReport`], and downgrades recoverable merge failures to
//! `Status::Error` steps so a multi-step generation can carry on. Filesystem
//! faults still abort via `?`.

use std::path::Path;
use std::sync::Arc;

use tracing::warn;

use crate::{
    application::{
        ports::Filesystem,
        report::GenerationReport,
        services::{ConfigMerger, FileWriter},
    },
    domain::{
        DirOutcome, FileOutcome, MergeOutcome, ProjectLayout, ScriptEntry, ServiceBlock, Status,
    },
    error::SeedlingResult,
};

pub struct Scaffolder {
    writer: FileWriter,
    merger: ConfigMerger,
    layout: ProjectLayout,
    overwrite: bool,
    report: GenerationReport,
}

impl Scaffolder {
    pub fn new(
        filesystem: Arc<dyn Filesystem>,
        layout: ProjectLayout,
        overwrite: bool,
        generator: &str,
    ) -> Self {
        Self {
            writer: FileWriter::new(Arc::clone(&filesystem)),
            merger: ConfigMerger::new(filesystem),
            layout,
            overwrite,
            report: GenerationReport::new(generator),
        }
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    pub fn directory(&mut self, path: &Path) -> SeedlingResult<DirOutcome> {
        let outcome = self.writer.ensure_directory(path)?;
        self.report.record(path, outcome, "directory");
        Ok(outcome)
    }

    /// Write a generated file, honouring the run's overwrite flag.
    pub fn file(&mut self, path: &Path, content: &str) -> SeedlingResult<FileOutcome> {
        let outcome = self.writer.ensure_file(path, content, self.overwrite)?;
        self.report.record(path, outcome, "file");
        Ok(outcome)
    }

    /// Write a file that is never overwritten, even on an overwrite run.
    /// Package `__init__.py` files may carry hand edits.
    pub fn file_once(&mut self, path: &Path, content: &str) -> SeedlingResult<FileOutcome> {
        let outcome = self.writer.ensure_file(path, content, false)?;
        self.report.record(path, outcome, "file");
        Ok(outcome)
    }

    pub fn executable(&mut self, path: &Path) -> SeedlingResult<()> {
        self.writer.ensure_executable(path)
    }

    /// Merge a script entry into the project manifest.
    ///
    /// Returns `Ok(None)` when the merge hit a recoverable error; the error is
    /// recorded in the report.
    pub fn script_entry(&mut self, entry: &ScriptEntry) -> SeedlingResult<Option<MergeOutcome>> {
        let document = self.layout.manifest_path();
        let result = self.merger.merge_script_entry(&document, entry.as_str());
        self.settle(&document, format!("script '{}'", entry.name()), result)
    }

    /// Merge a service block into the project's compose document.
    pub fn service_block(&mut self, block_text: &str) -> SeedlingResult<Option<MergeOutcome>> {
        let block = ServiceBlock::parse(block_text)?;
        let document = self.layout.compose_path();
        let result = self.merger.merge_service_block(&document, block.as_str());
        self.settle(&document, format!("service '{}'", block.name()), result)
    }

    pub fn finish(self) -> GenerationReport {
        self.report
    }

    fn settle(
        &mut self,
        document: &Path,
        label: String,
        result: SeedlingResult<MergeOutcome>,
    ) -> SeedlingResult<Option<MergeOutcome>> {
        match result {
            Ok(outcome) => {
                let message = match outcome {
                    MergeOutcome::Merged { bootstrapped: true } => {
                        format!("{label} (document bootstrapped)")
                    }
                    _ => label,
                };
                self.report.record(document, outcome, message);
                Ok(Some(outcome))
            }
            Err(err) if err.is_recoverable() => {
                warn!(path = %document.display(), error = %err, "merge skipped");
                self.report.record(document, Status::Error, err.to_string());
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}
