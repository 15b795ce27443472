//! Console-command generator.
//!
//! Writes `cmd/<name>_main.py`, registers it as a manifest script, drops a
//! launcher under `bin/` and optionally a Dockerfile plus compose service.

use tracing::instrument;

use crate::{
    application::{
        generators::{Generator, templates},
        services::Scaffolder,
    },
    domain::{Bindings, Name, ScriptEntry, render},
    error::SeedlingResult,
};

#[derive(Debug, Clone)]
pub struct CmdGenerator {
    command: String,
    name: Name,
    extra_import: String,
    extra_run: String,
    docker: bool,
    docker_compose: bool,
}

impl CmdGenerator {
    pub fn new(command: &str) -> SeedlingResult<Self> {
        Ok(Self {
            command: command.to_owned(),
            name: Name::parse(command)?,
            extra_import: String::new(),
            extra_run: String::new(),
            docker: false,
            docker_compose: false,
        })
    }

    /// Extra line placed after the `boot` import.
    pub fn extra_import(mut self, line: impl Into<String>) -> Self {
        self.extra_import = line.into();
        self
    }

    /// Extra statement placed after the `start()` call in the entry point.
    pub fn extra_run(mut self, line: impl Into<String>) -> Self {
        self.extra_run = line.into();
        self
    }

    pub fn docker(mut self, enabled: bool) -> Self {
        self.docker = enabled;
        self
    }

    /// Also merges a service into the compose document. Implies a Dockerfile.
    pub fn docker_compose(mut self, enabled: bool) -> Self {
        self.docker_compose = enabled;
        self
    }

    fn main_module(&self) -> String {
        format!("{}_main", self.name.snake())
    }
}

impl Generator for CmdGenerator {
    fn name(&self) -> &'static str {
        "cmd"
    }

    #[instrument(skip_all, fields(command = %self.command))]
    fn generate(&self, scaffolder: &mut Scaffolder) -> SeedlingResult<()> {
        let layout = scaffolder.layout().clone();
        let service = self.name.snake();
        let bindings = Bindings::new()
            .with("command", &self.command)
            .with("package_name", layout.package_name())
            .with("project_name", layout.project_name())
            .with("service", &service)
            .with("extra_import", &self.extra_import)
            .with("extra_run", &self.extra_run);

        let cmd_dir = layout.package_dir().join("cmd");
        scaffolder.directory(&cmd_dir)?;
        scaffolder.file_once(&cmd_dir.join("__init__.py"), "")?;
        scaffolder.file(
            &cmd_dir.join(format!("{}.py", self.main_module())),
            &render(templates::CMD_MAIN, &bindings),
        )?;

        let target = format!("{}.cmd.{}:main", layout.package_name(), self.main_module());
        scaffolder.script_entry(&ScriptEntry::assign(&self.command, &target))?;

        let bin_dir = layout.project_dir().join("bin");
        scaffolder.directory(&bin_dir)?;
        let launcher = bin_dir.join(format!("{service}.sh"));
        scaffolder.file(&launcher, &render(templates::CMD_LAUNCHER, &bindings))?;
        scaffolder.executable(&launcher)?;

        if self.docker || self.docker_compose {
            scaffolder.file(
                &layout.project_dir().join(format!("{service}.Dockerfile")),
                &render(templates::CMD_DOCKERFILE, &bindings),
            )?;
        }
        if self.docker_compose {
            scaffolder.service_block(&render(templates::CMD_SERVICE, &bindings))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_module_is_snake_with_suffix() {
        let generator = CmdGenerator::new("syncUsers").unwrap();
        assert_eq!(generator.main_module(), "sync_users_main");
    }

    #[test]
    fn docker_is_off_by_default() {
        let generator = CmdGenerator::new("worker").unwrap();
        assert!(!generator.docker && !generator.docker_compose);
    }
}
