//! Application services - orchestrate use cases.
//!
//! [`FileWriter`] and [`ConfigMerger`] are the idempotent write primitives,
//! [`Scaffolder`] records them for one run, and [`GenerationService`] drives a
//! generator through it.

pub mod generation_service;
pub mod merger;
pub mod scaffolder;
pub mod writer;

pub use generation_service::GenerationService;
pub use merger::ConfigMerger;
pub use scaffolder::Scaffolder;
pub use writer::FileWriter;
