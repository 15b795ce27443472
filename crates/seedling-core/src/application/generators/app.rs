//! Sibling app package generator.

use tracing::instrument;

use crate::{
    application::{
        generators::{Generator, templates},
        services::Scaffolder,
    },
    domain::{Bindings, Name, render},
    error::SeedlingResult,
};

/// Generates a new app package next to the main one, with `boot/`, `cmd/`
/// and `config/` modules. Task and command generators can then target it
/// through [`ProjectLayout::for_app`](crate::domain::ProjectLayout::for_app).
#[derive(Debug, Clone)]
pub struct AppGenerator {
    app: Name,
}

impl AppGenerator {
    pub fn new(app: &str) -> SeedlingResult<Self> {
        Ok(Self {
            app: Name::parse(app)?,
        })
    }
}

impl Generator for AppGenerator {
    fn name(&self) -> &'static str {
        "startapp"
    }

    #[instrument(skip_all, fields(app = %self.app.raw()))]
    fn generate(&self, scaffolder: &mut Scaffolder) -> SeedlingResult<()> {
        let layout = scaffolder.layout().for_app(self.app.raw())?;
        let app_dir = layout.package_dir();
        let bindings = Bindings::new().with("package_name", layout.package_name());

        scaffolder.directory(app_dir)?;
        scaffolder.file_once(&app_dir.join("__init__.py"), "")?;

        let boot_dir = app_dir.join("boot");
        scaffolder.directory(&boot_dir)?;
        scaffolder.file(&boot_dir.join("__init__.py"), templates::APP_BOOT)?;
        scaffolder.file(&boot_dir.join("ioc.py"), &render(templates::APP_IOC, &bindings))?;

        let cmd_dir = app_dir.join("cmd");
        scaffolder.directory(&cmd_dir)?;
        scaffolder.file_once(&cmd_dir.join("__init__.py"), "")?;

        let config_dir = app_dir.join("config");
        scaffolder.directory(&config_dir)?;
        scaffolder.file(
            &config_dir.join("__init__.py"),
            &render(templates::APP_CONFIG, &bindings),
        )?;
        Ok(())
    }
}
