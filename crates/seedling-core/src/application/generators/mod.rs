//! Generators: what to write for one kind of project artifact.
//!
//! A generator only decides paths and content. Every write goes through the
//! [`Scaffolder`] it is handed, which keeps the run idempotent.

pub mod app;
pub mod cmd;
pub mod task;
pub mod templates;

pub use app::AppGenerator;
pub use cmd::CmdGenerator;
pub use task::TaskGenerator;

use crate::{application::services::Scaffolder, error::SeedlingResult};

pub trait Generator {
    /// Short name used in reports and log spans.
    fn name(&self) -> &'static str;

    fn generate(&self, scaffolder: &mut Scaffolder) -> SeedlingResult<()>;
}
