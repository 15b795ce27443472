//! Implementation of the `seedling cmd` command.

use tracing::instrument;

use seedling_core::application::CmdGenerator;

use crate::{
    cli::{CmdArgs, GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(command = %args.command))]
pub fn execute(
    args: CmdArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let generator = CmdGenerator::new(&args.command)?
        .extra_import(args.extra_import.unwrap_or_default())
        .extra_run(args.extra_run.unwrap_or_default())
        .docker(args.docker)
        .docker_compose(args.docker_compose);
    super::generate(&generator, &args.location, &global, &config, &output)
}
