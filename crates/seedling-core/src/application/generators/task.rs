//! `tasks/<name>.py` generator.

use tracing::instrument;

use crate::{
    application::{
        generators::{Generator, templates},
        services::Scaffolder,
    },
    domain::{Bindings, Name, render},
    error::SeedlingResult,
};

/// Generates a task class under the package's `tasks/` module.
#[derive(Debug, Clone)]
pub struct TaskGenerator {
    class: Name,
    task_name: String,
    is_async: bool,
}

impl TaskGenerator {
    /// `class` is segmented; the module is its snake form and the class its
    /// Pascal form with a trailing `Task`. `task_name` defaults to `class`.
    pub fn new(class: &str, task_name: Option<&str>, is_async: bool) -> SeedlingResult<Self> {
        let class = Name::parse(class)?;
        let task_name = task_name.map_or_else(|| class.raw().to_owned(), str::to_owned);
        Ok(Self {
            class,
            task_name,
            is_async,
        })
    }
}

impl Generator for TaskGenerator {
    fn name(&self) -> &'static str {
        "task"
    }

    #[instrument(skip_all, fields(class = %self.class.raw(), is_async = self.is_async))]
    fn generate(&self, scaffolder: &mut Scaffolder) -> SeedlingResult<()> {
        let task_dir = scaffolder.layout().package_dir().join("tasks");
        scaffolder.directory(&task_dir)?;
        scaffolder.file_once(&task_dir.join("__init__.py"), "")?;

        let bindings = Bindings::new()
            .with("base_class", if self.is_async { "AsyncTask" } else { "Task" })
            .with("class_name", self.class.with_suffix("task").pascal())
            .with("async_prefix", if self.is_async { "async " } else { "" })
            .with("task_name", &self.task_name);
        let module = task_dir.join(format!("{}.py", self.class.snake()));
        scaffolder.file(&module, &render(templates::TASK_MODULE, &bindings))?;
        Ok(())
    }
}
