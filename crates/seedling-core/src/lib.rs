//! Seedling Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Seedling, a
//! substrate for adding generated artifacts to an existing project tree,
//! following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          seedling-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   Generators + Application Services     │
//! │ (GenerationService, FileWriter, Merger) │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │            (Filesystem)                 │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    seedling-adapters (Infrastructure)   │
//! │ (LocalFilesystem, MemoryFilesystem, …)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │    (Name, render, splice_after_anchor)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use seedling_core::prelude::*;
//!
//! # fn run(filesystem: Arc<dyn Filesystem>) -> SeedlingResult<()> {
//! let layout = ProjectLayout::new("/work/demo", "/work/demo/src/demo");
//! let generator = TaskGenerator::new("SyncUsers", None, false)?;
//!
//! let report = GenerationService::new(filesystem).run(&generator, layout, false)?;
//! assert!(!report.has_errors());
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AppGenerator, CmdGenerator, ConfigMerger, FileWriter, GenerationReport, GenerationService,
        Generator, Scaffolder, Step, TaskGenerator, ports::Filesystem,
    };
    pub use crate::domain::{
        Bindings, DirOutcome, FileOutcome, MergeOutcome, Name, ProjectLayout, Status, render,
        segment,
    };
    pub use crate::error::{SeedlingError, SeedlingResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
