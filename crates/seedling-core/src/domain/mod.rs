//! Core domain layer for Seedling.
//!
//! Pure text logic with no I/O: identifier segmentation, `${key}` rendering,
//! document splicing and the outcome types the substrate reports.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Value objects**: `Name`, `Bindings`, `ScriptEntry`, `ServiceBlock`,
//!   `ProjectLayout`
//!
pub mod documents;
pub mod error;
pub mod layout;
pub mod naming;
pub mod outcome;
pub mod template;

pub use documents::{DocumentKind, ScriptEntry, ServiceBlock, splice_after_anchor};
pub use error::DomainError;
pub use layout::ProjectLayout;
pub use naming::{Name, segment};
pub use outcome::{DirOutcome, FileOutcome, MergeOutcome, Status};
pub use template::{Bindings, placeholders, render};
