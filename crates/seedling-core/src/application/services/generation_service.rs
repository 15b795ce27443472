//! Generation Service - runs a generator against a located project.
//!
//! The service owns the filesystem port and hands each generator a fresh
//! [`Scaffolder`]; the generator decides what to write, the scaffolder makes
//! every write idempotent and records it.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError, GenerationReport, generators::Generator, ports::Filesystem,
        services::Scaffolder,
    },
    domain::{ProjectLayout, Status},
    error::SeedlingResult,
};

pub struct GenerationService {
    filesystem: Arc<dyn Filesystem>,
}

impl GenerationService {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Run `generator` against `layout`.
    ///
    /// Recoverable merge failures end up as `Status::Error` steps in the
    /// returned report; any other failure aborts the run, leaving whatever
    /// was already written in place. Re-running converges.
    #[instrument(
        skip_all,
        fields(
            generator = generator.name(),
            project = %layout.project_dir().display(),
            overwrite
        )
    )]
    pub fn run(
        &self,
        generator: &dyn Generator,
        layout: ProjectLayout,
        overwrite: bool,
    ) -> SeedlingResult<GenerationReport> {
        if !self.filesystem.is_dir(layout.project_dir()) {
            return Err(ApplicationError::ProjectNotFound {
                start: layout.project_dir().to_path_buf(),
            }
            .into());
        }

        let mut scaffolder = Scaffolder::new(
            Arc::clone(&self.filesystem),
            layout,
            overwrite,
            generator.name(),
        );
        generator.generate(&mut scaffolder)?;
        let report = scaffolder.finish();

        info!(
            created = report.count(Status::Created),
            replaced = report.count(Status::Replaced),
            skipped = report.count(Status::Skipped),
            merged = report.count(Status::Merged),
            errors = report.count(Status::Error),
            "Generation finished"
        );
        Ok(report)
    }
}
