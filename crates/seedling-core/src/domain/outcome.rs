//! Status signals returned by the substrate operations.
//!
//! Operations never log on their own behalf. They return one of these
//! outcomes and the caller decides how to present it.

use std::fmt;

use serde::Serialize;

/// Result of [`ensure_directory`](crate::application::FileWriter::ensure_directory).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirOutcome {
    Created,
    AlreadyExisted,
}

/// Result of [`ensure_file`](crate::application::FileWriter::ensure_file).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Created,
    RemovedThenCreated,
    SkippedExisting,
}

/// Result of a config block merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The block was spliced in. `bootstrapped` is set when the document had
    /// to be created from its skeleton first.
    Merged { bootstrapped: bool },
    /// The block's marker was already present; nothing was written.
    AlreadyPresent,
}

/// Coarse status used for progress logs and machine-readable reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Created,
    Replaced,
    Skipped,
    Merged,
    Error,
}

impl Status {
    /// `true` when the step changed something on disk.
    pub fn is_change(self) -> bool {
        matches!(self, Self::Created | Self::Replaced | Self::Merged)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Created => "created",
            Self::Replaced => "replaced",
            Self::Skipped => "skipped",
            Self::Merged => "merged",
            Self::Error => "error",
        };
        f.pad(label)
    }
}

impl From<DirOutcome> for Status {
    fn from(outcome: DirOutcome) -> Self {
        match outcome {
            DirOutcome::Created => Self::Created,
            DirOutcome::AlreadyExisted => Self::Skipped,
        }
    }
}

impl From<FileOutcome> for Status {
    fn from(outcome: FileOutcome) -> Self {
        match outcome {
            FileOutcome::Created => Self::Created,
            FileOutcome::RemovedThenCreated => Self::Replaced,
            FileOutcome::SkippedExisting => Self::Skipped,
        }
    }
}

impl From<MergeOutcome> for Status {
    fn from(outcome: MergeOutcome) -> Self {
        match outcome {
            MergeOutcome::Merged { .. } => Self::Merged,
            MergeOutcome::AlreadyPresent => Self::Skipped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcomes_map_to_status() {
        assert_eq!(Status::from(DirOutcome::AlreadyExisted), Status::Skipped);
        assert_eq!(Status::from(FileOutcome::RemovedThenCreated), Status::Replaced);
        assert_eq!(
            Status::from(MergeOutcome::Merged { bootstrapped: true }),
            Status::Merged
        );
    }

    #[test]
    fn only_mutations_count_as_changes() {
        assert!(Status::Created.is_change());
        assert!(!Status::Skipped.is_change());
        assert!(!Status::Error.is_change());
    }

    #[test]
    fn status_serialises_snake_case() {
        assert_eq!(serde_json::to_string(&Status::Replaced).unwrap(), "\"replaced\"");
    }
}
