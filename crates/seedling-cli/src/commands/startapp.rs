//! Implementation of the `seedling startapp` command.

use tracing::instrument;

use seedling_core::application::AppGenerator;

use crate::{
    cli::{GlobalArgs, StartAppArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(app = %args.name))]
pub fn execute(
    args: StartAppArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let generator = AppGenerator::new(&args.name)?;
    super::generate(&generator, &args.location, &global, &config, &output)
}
