//! Application layer for Seedling.
//!
//! This layer contains:
//! - **Services**: the idempotent writer, the config merger and the
//!   generation runner
//! - **Generators**: task and command artifacts built on those services
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Text rules (segmentation, rendering, splicing) live in `crate::domain`.

pub mod error;
pub mod generators;
pub mod ports;
pub mod report;
pub mod services;

pub use services::{ConfigMerger, FileWriter, GenerationService, Scaffolder};

pub use generators::{AppGenerator, CmdGenerator, Generator, TaskGenerator};

pub use report::{GenerationReport, Step};

// Re-export port traits (for adapter implementation)
pub use ports::Filesystem;

pub use error::ApplicationError;
