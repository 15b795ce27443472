//! Command handlers. One module per subcommand.

pub mod cmd;
pub mod completions;
pub mod config;
pub mod init;
pub mod names;
pub mod startapp;
pub mod task;

use std::sync::Arc;

use tracing::{debug, info};

use seedling_adapters::{LocalFilesystem, ProjectLocator};
use seedling_core::{
    application::{GenerationService, Generator},
    domain::ProjectLayout,
};

use crate::{
    cli::{GlobalArgs, LocationArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Resolve the target layout from flags, config and discovery.
pub(crate) fn resolve_layout(
    location: &LocationArgs,
    config: &AppConfig,
) -> CliResult<ProjectLayout> {
    let cwd = std::env::current_dir()?;
    let locator =
        ProjectLocator::with_documents(&config.project.manifest, &config.project.compose);

    let layout = locator.locate(
        &cwd,
        location.project_dir.as_deref(),
        location.package_dir.as_deref(),
    )?;
    info!(
        project = %layout.project_dir().display(),
        package = %layout.package_dir().display(),
        "project located"
    );

    match &location.app {
        Some(app) => {
            let layout = layout.for_app(app).map_err(|e| CliError::Core(e.into()))?;
            debug!(package = %layout.package_dir().display(), "redirected to app package");
            Ok(layout)
        }
        None => Ok(layout),
    }
}

/// Run `generator` on the local filesystem, print the report and apply
/// strict mode.
pub(crate) fn generate(
    generator: &dyn Generator,
    location: &LocationArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let layout = resolve_layout(location, config)?;
    let overwrite = location.overwrite || config.generation.overwrite;

    let service = GenerationService::new(Arc::new(LocalFilesystem::new()));
    let report = service.run(generator, layout.clone(), overwrite)?;

    output.report(&report, |path| layout.relative(path))?;

    let strict = global.strict || config.generation.strict;
    if strict && report.has_errors() {
        return Err(CliError::GenerationIncomplete {
            errors: report.errors().count(),
        });
    }
    Ok(())
}
