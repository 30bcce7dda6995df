//! Per-operation counts over a list of change records.

use super::schema::{ChangeRecord, Operation};
use serde::Serialize;
use std::fmt;

/// Summary of a diff result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChangeSummary {
    /// Number of `add` records
    pub added: usize,

    /// Number of `update` records
    pub updated: usize,

    /// Number of `delete` records
    pub deleted: usize,
}

impl ChangeSummary {
    pub fn total(&self) -> usize {
        self.added + self.updated + self.deleted
    }

    /// True when the snapshots were equal
    pub fn is_unchanged(&self) -> bool {
        self.total() == 0
    }
}

impl fmt::Display for ChangeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unchanged() {
            return write!(f, "no changes");
        }
        write!(
            f,
            "{} change{} ({} added, {} updated, {} deleted)",
            self.total(),
            if self.total() == 1 { "" } else { "s" },
            self.added,
            self.updated,
            self.deleted
        )
    }
}

/// Count records per operation
pub fn summarize(records: &[ChangeRecord<'_>]) -> ChangeSummary {
    records
        .iter()
        .fold(ChangeSummary::default(), |mut summary, record| {
            match record.operation {
                Operation::Add => summary.added += 1,
                Operation::Update => summary.updated += 1,
                Operation::Delete => summary.deleted += 1,
            }
            summary
        })
}
