//! Ordered record of what a generation run did.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::Status;

/// One substrate operation and how it ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub path: PathBuf,
    pub status: Status,
    pub message: String,
}

/// Steps in the order they ran.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    generator: String,
    steps: Vec<Step>,
}

impl GenerationReport {
    pub fn new(generator: impl Into<String>) -> Self {
        Self {
            generator: generator.into(),
            steps: Vec::new(),
        }
    }

    pub fn record(&mut self, path: &Path, status: impl Into<Status>, message: impl Into<String>) {
        self.steps.push(Step {
            path: path.to_path_buf(),
            status: status.into(),
            message: message.into(),
        });
    }

    pub fn generator(&self) -> &str {
        &self.generator
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn count(&self, status: Status) -> usize {
        self.steps.iter().filter(|s| s.status == status).count()
    }

    /// Steps that recorded a recoverable error.
    pub fn errors(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter().filter(|s| s.status == Status::Error)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// `true` when at least one step changed the tree.
    pub fn changed_anything(&self) -> bool {
        self.steps.iter().any(|s| s.status.is_change())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DirOutcome, FileOutcome};

    #[test]
    fn counts_by_status() {
        let mut report = GenerationReport::new("task");
        report.record(Path::new("tasks"), DirOutcome::Created, "directory");
        report.record(Path::new("tasks/__init__.py"), FileOutcome::SkippedExisting, "file");
        report.record(Path::new("pyproject.toml"), Status::Error, "manifest missing");

        assert_eq!(report.count(Status::Created), 1);
        assert_eq!(report.count(Status::Skipped), 1);
        assert!(report.has_errors());
        assert!(report.changed_anything());
        assert_eq!(report.errors().count(), 1);
    }

    #[test]
    fn rerun_with_only_skips_changes_nothing() {
        let mut report = GenerationReport::new("cmd");
        report.record(Path::new("cmd"), DirOutcome::AlreadyExisted, "directory");
        assert!(!report.changed_anything());
        assert!(!report.has_errors());
    }

    #[test]
    fn serialises_for_machine_output() {
        let mut report = GenerationReport::new("task");
        report.record(Path::new("a.py"), FileOutcome::Created, "file");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["generator"], "task");
        assert_eq!(json["steps"][0]["status"], "created");
    }
}
