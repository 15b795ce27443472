//! Implementation of the `seedling task` command.

use tracing::instrument;

use seedling_core::application::TaskGenerator;

use crate::{
    cli::{GlobalArgs, TaskArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(class = %args.class))]
pub fn execute(
    args: TaskArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let generator = TaskGenerator::new(&args.class, args.name.as_deref(), args.is_async)?;
    super::generate(&generator, &args.location, &global, &config, &output)
}
